use std::collections::HashMap;

use proptest::prelude::*;
use u_dispatch::dispatch::{DispatchConfig, DispatchEngine, DispatchOutcome};
use u_dispatch::emergency::EmergencyCall;
use u_dispatch::library::{Book, Catalog, LoanHandler, LoanRequest};
use u_dispatch::ordering::{DispatchOrder, RecordOrder, ReportOrder};
use u_dispatch::queue::load_batch;
use u_dispatch::sorting::{SortAlgorithm, SortEngine};
use u_dispatch::traversal::reachable_set;
use u_dispatch::workload::WorkloadConfig;

// Orders calls by response time only, leaving ties to the algorithm.
struct ResponseTimeOnly;

impl RecordOrder<EmergencyCall> for ResponseTimeOnly {
    fn name(&self) -> &str {
        "response_time"
    }
    fn compare(&self, a: &EmergencyCall, b: &EmergencyCall) -> std::cmp::Ordering {
        a.estimated_response_time.cmp(&b.estimated_response_time)
    }
}

fn calls(seed: u64, n: usize) -> Vec<EmergencyCall> {
    WorkloadConfig::default()
        .with_seed(seed)
        .with_max_priority(3)
        .calls(n)
}

proptest! {
    /// Property: all algorithms produce the same report ordering
    #[test]
    fn algorithms_agree_under_report_order(seed in any::<u64>(), n in 0usize..200) {
        let input = calls(seed, n);
        let comparison = SortEngine::compare_all(&input, &ReportOrder);

        prop_assert!(comparison.consistent);
        let ids = |alg| -> Vec<String> {
            comparison.get(alg).unwrap().records.iter().map(|c| c.id.clone()).collect()
        };
        prop_assert_eq!(ids(SortAlgorithm::Quicksort), ids(SortAlgorithm::Mergesort));
        prop_assert_eq!(ids(SortAlgorithm::Mergesort), ids(SortAlgorithm::Baseline));
    }

    /// Property: mergesort and baseline keep input order among equal keys
    #[test]
    fn stable_algorithms_preserve_tie_order(seed in any::<u64>(), n in 0usize..200) {
        let input = calls(seed, n);
        let position: HashMap<&str, usize> =
            input.iter().enumerate().map(|(i, c)| (c.id.as_str(), i)).collect();

        for alg in [SortAlgorithm::Mergesort, SortAlgorithm::Baseline] {
            let sorted = SortEngine::sort(&input, alg, &ResponseTimeOnly).records;
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].estimated_response_time <= pair[1].estimated_response_time);
                if pair[0].estimated_response_time == pair[1].estimated_response_time {
                    prop_assert!(position[pair[0].id.as_str()] < position[pair[1].id.as_str()]);
                }
            }
        }
    }

    /// Property: the queue drains in non-decreasing dispatch order
    #[test]
    fn queue_drains_in_dispatch_order(seed in any::<u64>(), n in 0usize..300) {
        let drained = load_batch(calls(seed, n)).unwrap().into_sorted_vec();

        prop_assert_eq!(drained.len(), n);
        for pair in drained.windows(2) {
            prop_assert!(DispatchOrder.le(&pair[0], &pair[1]));
        }
    }

    /// Property: successes per book never exceed its initial copies
    #[test]
    fn loans_never_overdraw(seed in any::<u64>(), books in 1usize..20, requests in 0usize..200) {
        let config = WorkloadConfig::default().with_seed(seed);
        let mut catalog = config.catalog(books);
        let initial: HashMap<String, u32> =
            catalog.iter().map(|b| (b.id.clone(), b.available_copies)).collect();

        let admission = catalog.admit_requests(config.requests(requests, books)).unwrap();
        let run = {
            let mut handler = LoanHandler::new(&mut catalog);
            DispatchEngine::run(admission.queue, &mut handler, &DispatchConfig::default()).unwrap()
        };

        let mut successes: HashMap<&str, u32> = HashMap::new();
        for request in &run.processed {
            if request.outcome == Some(DispatchOutcome::Success) {
                *successes.entry(request.book_id.as_str()).or_default() += 1;
            }
        }
        for book in catalog.iter() {
            let used = successes.get(book.id.as_str()).copied().unwrap_or(0);
            prop_assert!(used <= initial[&book.id]);
            prop_assert_eq!(book.available_copies, initial[&book.id] - used);
        }
    }

    /// Property: reachability terminates on cyclic graphs and excludes the origin
    #[test]
    fn reachability_excludes_origin(seed in any::<u64>(), n in 1usize..40, depth in 0usize..6) {
        let catalog = WorkloadConfig::default()
            .with_seed(seed)
            .with_dangling_ratio(0.2)
            .catalog(n);

        for book in catalog.iter() {
            let reached = reachable_set(&book.id, &catalog, depth);
            prop_assert!(!reached.contains(&book.id));
            prop_assert!(reached.iter().all(|id| catalog.contains(id)));
            if depth == 0 {
                prop_assert!(reached.is_empty());
            }
        }
    }
}

#[test]
fn sample_batch_dispatch_sequence() {
    let at = |s| chrono::DateTime::from_timestamp(s, 0).unwrap();
    let queue = load_batch(vec![
        EmergencyCall::new("x", 2, at(1)),
        EmergencyCall::new("y", 1, at(1)),
        EmergencyCall::new("z", 1, at(0)),
    ])
    .unwrap();

    let order: Vec<String> = queue.into_sorted_vec().into_iter().map(|c| c.id).collect();
    assert_eq!(order, vec!["z", "y", "x"]);
}

#[test]
fn library_pipeline_end_to_end() {
    let mut catalog: Catalog = vec![
        Book::new("B1", "Kindred", 1979).with_copies(1).with_recommendation("B2"),
        Book::new("B2", "Dawn", 1987).with_recommendation("B1"),
    ]
    .into_iter()
    .collect();
    let ts = chrono::DateTime::from_timestamp(0, 0).unwrap();

    let admission = catalog
        .admit_requests(vec![
            LoanRequest::new("S1", "U1", "B1", 1, ts),
            LoanRequest::new("S2", "U2", "B1", 2, ts),
            LoanRequest::new("S3", "U3", "B9", 1, ts),
        ])
        .unwrap();
    assert_eq!(admission.skipped.len(), 1);

    let run = DispatchEngine::run(
        admission.queue,
        &mut LoanHandler::new(&mut catalog),
        &DispatchConfig::default(),
    )
    .unwrap();
    assert_eq!(run.count(DispatchOutcome::Success), 1);
    assert_eq!(run.count(DispatchOutcome::NoAvailability), 1);

    let sorted = catalog.sorted_by_name("year", "quicksort").unwrap();
    assert_eq!(sorted.records[0].id, "B1");
    assert_eq!(reachable_set("B1", &catalog, 3).len(), 1);
}
