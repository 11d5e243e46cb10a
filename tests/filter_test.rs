use chrono::{TimeZone, Utc};
use job_scout::classify::classify;
use job_scout::{ExperienceYears, FilterPolicy, JobFilter, JobPosting};

fn posting(title: &str, location: &str, years: &str, url: &str) -> JobPosting {
    JobPosting {
        company: "Acme".into(),
        title: title.into(),
        location: location.into(),
        url: url.into(),
        experience_years: years.parse().unwrap(),
        extracted_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

fn mixed_batch() -> Vec<JobPosting> {
    vec![
        posting("Junior Developer", "Berlin", "0-2", "https://a.example/1"),
        posting("Senior Developer", "Berlin", "0-2", "https://a.example/2"),
        posting("Junior Developer", "Paris", "0-2", "https://a.example/3"),
        posting("Junior Developer", "Hamburg", "5+", "https://a.example/4"),
        posting("Developer", "Köln", "Not specified", "https://a.example/5"),
        posting("Developer", "München", "4-6", "https://a.example/6"),
        posting("Trainee Engineer", "Frankfurt am Main", "1+", "https://a.example/1"),
        posting("Graduate Analyst", "Not specified", "Not specified", "https://a.example/7"),
    ]
}

#[test]
fn keeps_only_postings_passing_every_predicate() {
    let filter = JobFilter::default();
    let jobs = mixed_batch();

    let kept = filter.filter(&jobs);
    let urls: Vec<&str> = kept.iter().map(|j| j.url.as_str()).collect();

    // 1 passes; 2 is senior; 3 is outside the region; 4 asks for too much;
    // 5 passes on lenient "Not specified"; 6 has no junior signal;
    // the trainee repeats URL 1; 7 has no location.
    assert_eq!(urls, vec!["https://a.example/1", "https://a.example/5"]);

    for job in &kept {
        assert!(filter.policy().accepts(job));
    }
}

#[test]
fn output_urls_are_unique_and_first_occurrence_wins() {
    let jobs = vec![
        posting("Junior Developer", "Berlin", "0-2", "https://a.example/1"),
        posting("Junior Tester", "Hamburg", "1-2", "https://a.example/1"),
    ];

    let kept = JobFilter::default().filter(&jobs);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Junior Developer");
}

#[test]
fn filtering_is_idempotent() {
    let filter = JobFilter::default();
    let once = filter.filter(&mixed_batch());
    let twice = filter.filter(&once);
    assert_eq!(once, twice);
}

#[test]
fn senior_keyword_vetoes_despite_junior_signal() {
    let filter = JobFilter::default();
    let job = posting("Junior to Senior Engineer", "Berlin", "0-2", "https://a.example/x");
    assert!(!filter.policy().matches_seniority(&job));
    assert!(filter.filter(&[job]).is_empty());
}

#[test]
fn experience_ceiling_boundary() {
    let policy = FilterPolicy::default();
    let at = posting("Junior", "Berlin", "3+", "https://a.example/x");
    let over = posting("Junior", "Berlin", "4-5", "https://a.example/y");

    assert!(policy.matches_experience(&at));
    assert!(!policy.matches_experience(&over));
}

#[test]
fn custom_policy_replaces_region_and_ceiling() {
    let policy = FilterPolicy {
        locations: vec!["Wien".into(), "Austria".into()],
        max_years: 5,
        ..FilterPolicy::default()
    };
    let filter = JobFilter::new(policy);

    let jobs = vec![
        posting("Junior Developer", "WIEN", "4-6", "https://a.example/1"),
        posting("Junior Developer", "Berlin", "0-2", "https://a.example/2"),
    ];
    let kept = filter.filter(&jobs);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].location, "WIEN");
}

#[test]
fn stats_count_each_criterion_over_the_original() {
    let filter = JobFilter::default();
    let jobs = mixed_batch();
    let kept = filter.filter(&jobs);

    let stats = filter.stats(&jobs, &kept);

    assert_eq!(stats.total_original, 8);
    assert_eq!(stats.total_filtered, 2);
    assert_eq!(stats.removed, 6);
    // Everything but Paris and "Not specified" is in the region.
    assert_eq!(stats.by_location, 6);
    assert!(stats.by_experience <= stats.total_original);
}

#[test]
fn experience_values_parse_from_canonical_strings() {
    assert_eq!("0-2".parse::<ExperienceYears>().unwrap(), ExperienceYears::Range(0, 2));
    assert_eq!("5+".parse::<ExperienceYears>().unwrap(), ExperienceYears::AtLeast(5));
    assert_eq!(
        "Not specified".parse::<ExperienceYears>().unwrap(),
        ExperienceYears::NotSpecified
    );
    assert!("a few".parse::<ExperienceYears>().is_err());
}

#[test]
fn huge_experience_counts_are_rejected() {
    let mut job = posting("Junior Developer", "Berlin", "0-2", "https://a.example/x");
    job.experience_years = classify(Some("99999999999 years of experience"));

    assert_eq!(job.experience_years.to_string(), "99999999999+");
    assert!(!FilterPolicy::default().accepts(&job));
}
