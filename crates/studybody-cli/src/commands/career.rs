//! Career recommendations by MBTI type.

use studybody_core::{career_recommendations, Mbti};

pub fn run(mbti: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mbti = mbti.parse::<Mbti>()?;

    println!("Career recommendations for {mbti}:");
    for (i, job) in career_recommendations(mbti).iter().enumerate() {
        println!("  {}. {job}", i + 1);
    }
    Ok(())
}
