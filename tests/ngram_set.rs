use ngramset::{compare, similarity, NGramSet, NGramSetConfig};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn similarity_formula_values() {
    assert!(approx(similarity(5, 10, 1.0), 0.5));
    assert!(approx(similarity(5, 10, 2.0), 0.75));
    assert!(approx(similarity(2, 4, 2.0), 0.75));
}

#[test]
fn spam_span_eg_search() {
    let set = NGramSet::from_items(names(&["SPAM", "SPAN", "EG"]), NGramSetConfig::default()).unwrap();
    let results = set.search("SPA", None);
    let mut found: Vec<&str> = results.iter().map(|(item, _)| item.as_str()).collect();
    found.sort();
    assert_eq!(found, vec!["SPAM", "SPAN"]);
    assert!(results.iter().all(|(_, sim)| approx(*sim, 0.375)));
}

#[test]
fn find_prefers_closest_member() {
    let set = NGramSet::from_items_with_key(
        names(&["Spam", "Eggs", "Ham"]),
        NGramSetConfig::default().with_ngram_size(1),
        |item: &String| item.to_lowercase(),
    )
    .unwrap();
    assert_eq!(set.find("Hom", None).map(String::as_str), Some("Ham"));
}

#[test]
fn search_results_never_increase() {
    let words = names(&[
        "apple", "apply", "ample", "maple", "applesauce", "pineapple", "grape", "happy",
    ]);
    let set = NGramSet::from_items(words, NGramSetConfig::default().with_warp(1.7)).unwrap();
    for query in ["apple", "app", "le", "grapple", "x"] {
        let results = set.search(query, None);
        assert!(results.windows(2).all(|w| w[0].1 >= w[1].1), "{}", query);
        assert!(results.iter().all(|(_, sim)| (0.0..=1.0).contains(sim)));
    }
}

#[test]
fn self_similarity_is_one_and_disjoint_is_zero() {
    for s in ["spam", "a", "hello world"] {
        assert!(approx(compare(s, s), 1.0));
    }
    assert_eq!(compare("spam", "xyz"), 0.0);
}

#[test]
fn insert_remove_round_trip_is_observationally_invisible() {
    let mut set = NGramSet::from_items(names(&["ham", "spam", "eggs"]), NGramSetConfig::default()).unwrap();
    let snapshot = |set: &NGramSet<String>| {
        let mut hits: Vec<(String, u64)> = ["mam", "spa", "egg", "hamster"]
            .iter()
            .flat_map(|q| set.search(q, None))
            .map(|(item, sim)| (item.clone(), sim.to_bits()))
            .collect();
        hits.sort();
        (set.stats(), hits)
    };
    let before = snapshot(&set);
    set.insert("hamster".to_string());
    assert_ne!(snapshot(&set), before);
    set.remove(&"hamster".to_string());
    assert_eq!(snapshot(&set), before);
}

#[test]
fn set_algebra_keeps_search_consistent() {
    let mut set = NGramSet::from_items(names(&["spam", "eggs", "ham"]), NGramSetConfig::default()).unwrap();
    set.symmetric_difference_update(names(&["ham", "bacon"]));
    let mut members: Vec<&String> = set.iter().collect();
    members.sort();
    assert_eq!(members, vec!["bacon", "eggs", "spam"]);
    assert!(!set.search("ham", None).iter().any(|(item, _)| *item == "ham"));
    assert_eq!(set.find("bacn", None).map(String::as_str), Some("bacon"));
}
