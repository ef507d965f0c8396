use find_overlap::{OverlapChecker, OverlapConfig};

fn main() {
    let target = "Welcome to Jimbocho, the town of books and curry! \
                  Secondhand bookstores line every street of the district.";
    let references = vec![
        ("copied.txt", "Welcome to Jimbocho, the town of books and curry!"),
        ("paraphrased.txt", "Jimbocho is a district famous for books, curry and bookstores."),
        ("unrelated.txt", "Akihabara is known for electronics shops and arcades."),
    ];

    // Compares word trigrams with the default limits.
    let mut checker = OverlapChecker::new(OverlapConfig::default().with_k(3))
        .unwrap()
        .target("target.txt", target)
        .unwrap();
    for (name, text) in references {
        checker = checker.reference(name, text).unwrap();
    }

    let report = checker.compare().unwrap();
    for cmp in &report.comparisons {
        println!(
            "{}: overall={:.4} matching={} phrases={:?}",
            cmp.filename, cmp.overall, cmp.matching_kgrams, cmp.common_phrases
        );
    }

    // Every shingle of the copied passage is in the target.
    assert_eq!(report.comparisons[0].common_phrases, vec!["welcome jimbocho town books curry"]);
    assert_eq!(report.comparisons[2].overall, 0.);
    assert_eq!(report.most_similar().unwrap().filename, "copied.txt");
}
