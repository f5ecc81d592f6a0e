// Criterion benchmarks for Hood Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hood_match::core::{parse_text_to_preferences, score_and_sort_neighborhoods, Matcher};
use hood_match::models::{CandidateQuery, DiningStyle, Neighborhood, ScoringPreferences, Vibe};

fn create_neighborhood(id: usize) -> Neighborhood {
    let r = |offset: usize| (1 + (id + offset) % 5) as u8;
    Neighborhood {
        id: id.to_string(),
        city_id: if id % 2 == 0 { "london" } else { "new-york" }.to_string(),
        name: format!("Neighborhood {}", id),
        borough: format!("Borough {}", id % 7),
        affordability: r(0),
        safety: r(1),
        transit: r(2),
        green_space: r(3),
        nightlife: r(4),
        family_friendly: r(1),
        dining: r(2),
        dining_style: DiningStyle::Diverse,
        vibe: match id % 3 {
            0 => Vibe::Happening,
            1 => Vibe::Moderate,
            _ => Vibe::Quiet,
        },
        description: String::new(),
        highlights: vec![],
        latitude: None,
        longitude: None,
    }
}

fn bench_text_parser(c: &mut Criterion) {
    let text = "We need somewhere safe and affordable near the tube with a park for the kids. \
                I don't care about nightlife but good restaurants would be nice.";
    c.bench_function("parse_text_to_preferences", |b| {
        b.iter(|| parse_text_to_preferences(black_box(text)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let mut prefs = ScoringPreferences::default();
    prefs.safety = 90;
    prefs.nightlife = 10;

    let mut group = c.benchmark_group("ranking");

    for count in [10, 50, 100, 500, 1000].iter() {
        let hoods: Vec<Neighborhood> = (0..*count).map(create_neighborhood).collect();

        group.bench_with_input(BenchmarkId::new("score_and_sort", count), count, |b, _| {
            b.iter(|| score_and_sort_neighborhoods(black_box(&hoods), black_box(&prefs)));
        });

        let matcher = Matcher::default();
        let query = CandidateQuery {
            city_id: Some("london".to_string()),
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("matcher_rank", count), count, |b, _| {
            b.iter(|| matcher.rank(black_box(&prefs), black_box(&hoods), black_box(&query)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_parser, bench_ranking);

criterion_main!(benches);
