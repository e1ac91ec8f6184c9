use krishi_core::engine::outcome::{Recommendation, ScoredCrop};
use krishi_core::yields::YieldEstimate;

pub fn print_recommendation(recommendation: &Recommendation, all_scores: Option<&[ScoredCrop]>) {
    let prediction = &recommendation.prediction;

    println!(
        "Recommended crop: {} ({:.1}% match)\n",
        prediction.predicted_crop, prediction.confidence_percentage
    );

    let scores: &[ScoredCrop] = match all_scores {
        Some(all) => all,
        None => &prediction.top_3_alternatives,
    };

    let heading = if all_scores.is_some() {
        "All crops:"
    } else {
        "Top alternatives:"
    };
    println!("{heading}");

    let max_name = scores.iter().map(|s| s.crop.len()).max().unwrap_or(10);
    for scored in scores {
        println!(
            "  {:<width$}  {:>5.1}%",
            scored.crop,
            scored.confidence_percentage,
            width = max_name
        );
    }
    println!();

    println!("Advisory:");
    let max_title = recommendation
        .advisory
        .iter()
        .map(|item| item.title.len())
        .max()
        .unwrap_or(10);
    for item in &recommendation.advisory {
        println!(
            "  {:<width$}  {}",
            item.title,
            item.description,
            width = max_title
        );
    }
    println!();
}

pub fn print_estimate(estimate: &YieldEstimate) {
    println!(
        "Yield estimate for {} ({}, {})",
        estimate.crop, estimate.season, estimate.year
    );
    if !estimate.district.is_empty() {
        println!("District: {}", estimate.district);
    }
    println!();
    println!("  Yield:      {} t/ha", estimate.predicted_yield);
    println!(
        "  Production: {} t over {} ha",
        estimate.predicted_production, estimate.area
    );
    println!();
}
