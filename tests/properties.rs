use proptest::prelude::*;
use std::cmp::Ordering;
use traitz::api::{NoMatchPolicy, TraitzApi};
use traitz::commands::filter::{evaluate, FilterOptions};
use traitz::index::TraitIndex;
use traitz::model::Record;
use traitz::ordering::{compare_values, sorted_values};
use traitz::store::memory::InMemorySource;

fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[A-Z][a-z]{2,6}",
        prop::collection::vec(
            (prop::sample::select(vec!["Color", "Hat", "Eyes"]), "(Red|Blue|Type[0-9]{0,2})?"),
            0..5,
        ),
    )
        .prop_map(|(name, attrs)| {
            attrs
                .into_iter()
                .fold(Record::new(name, ""), |record, (t, v)| {
                    record.with_attribute(t, &v)
                })
        })
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 1..12)
}

fn all_pairs(index: &TraitIndex) -> Vec<(String, String)> {
    index
        .iter()
        .flat_map(|t| {
            t.values
                .iter()
                .map(move |v| (t.trait_type.clone(), v.clone()))
        })
        .collect()
}

proptest! {
    #[test]
    fn index_holds_every_nonempty_pair_once(records in arb_records()) {
        let (index, selection) = TraitIndex::build(&records);

        for record in &records {
            for attr in &record.attributes {
                prop_assert_eq!(index.contains(&attr.trait_type, &attr.value), !attr.value.is_empty());
            }
        }

        let pairs = all_pairs(&index);
        let mut deduped = pairs.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(pairs.len(), deduped.len());
        prop_assert_eq!(pairs.len(), index.pair_count());
        prop_assert!(selection.all_unchecked());
    }

    #[test]
    fn rebuilding_gives_the_same_index(records in arb_records()) {
        let (first, _) = TraitIndex::build(&records);
        let (second, _) = TraitIndex::build(&records);
        prop_assert_eq!(all_pairs(&first), all_pairs(&second));
    }

    #[test]
    fn toggling_twice_restores_the_selection(records in arb_records(), pick in any::<prop::sample::Index>()) {
        let (index, mut selection) = TraitIndex::build(&records);
        let pairs = all_pairs(&index);
        prop_assume!(!pairs.is_empty());
        let (t, v) = pick.get(&pairs);

        prop_assert_eq!(selection.toggle(t, v).unwrap(), true);
        prop_assert!(!selection.all_unchecked());
        prop_assert_eq!(selection.toggle(t, v).unwrap(), false);
        prop_assert!(selection.all_unchecked());
        prop_assert_eq!(selection.is_checked(t, v), Some(false));
    }

    #[test]
    fn result_is_the_ordered_conjunction(
        records in arb_records(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let (index, mut selection) = TraitIndex::build(&records);
        let pairs = all_pairs(&index);
        prop_assume!(!pairs.is_empty());

        let mut checked: Vec<(String, String)> = Vec::new();
        for pick in &picks {
            let (t, v) = pick.get(&pairs).clone();
            if !checked.contains(&(t.clone(), v.clone())) {
                selection.toggle(&t, &v).unwrap();
                checked.push((t, v));
            }
        }

        let options = FilterOptions::new(NoMatchPolicy::Empty, "unused");
        let outcome = evaluate(&records, &selection, &options);

        let expected: Vec<&str> = records
            .iter()
            .filter(|r| checked.iter().all(|(t, v)| r.has_pair(t, v)))
            .map(|r| r.name.as_str())
            .collect();
        let got: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        prop_assert_eq!(got, expected.clone());
        prop_assert_eq!(outcome.matched, expected.len());
    }

    #[test]
    fn sentinel_stands_in_for_every_empty_result(records in arb_records(), pick in any::<prop::sample::Index>()) {
        let (index, mut selection) = TraitIndex::build(&records);
        let pairs = all_pairs(&index);
        prop_assume!(!pairs.is_empty());
        let (t, v) = pick.get(&pairs);
        selection.toggle(t, v).unwrap();

        let outcome = evaluate(&records, &selection, &FilterOptions::default());
        if outcome.matched == 0 {
            prop_assert!(outcome.is_sentinel);
            prop_assert_eq!(outcome.records.len(), 1);
        } else {
            prop_assert!(!outcome.is_sentinel);
            prop_assert_eq!(outcome.records.len(), outcome.matched);
        }
    }

    #[test]
    fn comparator_is_a_total_order(
        a in "[A-Za-z]{0,3}[0-9]{0,3}[a-z]{0,2}",
        b in "[A-Za-z]{0,3}[0-9]{0,3}[a-z]{0,2}",
        c in "[A-Za-z]{0,3}[0-9]{0,3}[a-z]{0,2}",
    ) {
        prop_assert_eq!(compare_values(&a, &b), compare_values(&b, &a).reverse());
        prop_assert_eq!(compare_values(&a, &a), Ordering::Equal);
        if compare_values(&a, &b) != Ordering::Greater && compare_values(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare_values(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn sorted_values_is_a_sorted_permutation(values in prop::collection::vec("[A-C]{1,2}[0-9]{0,3}", 0..10)) {
        let sorted = sorted_values(&values);

        let mut unsorted = values.clone();
        let mut permuted = sorted.clone();
        unsorted.sort();
        permuted.sort();
        prop_assert_eq!(unsorted, permuted);

        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_values(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn session_reset_always_clears(records in arb_records(), pick in any::<prop::sample::Index>()) {
        let mut api = TraitzApi::new(InMemorySource::from_records(records), FilterOptions::default());
        api.load().unwrap();

        let pairs = all_pairs(api.index().unwrap());
        prop_assume!(!pairs.is_empty());
        let (t, v) = pick.get(&pairs);
        api.toggle(t, v).unwrap();
        api.reset().unwrap();

        prop_assert!(api.selection().unwrap().all_unchecked());
        prop_assert!(api.result().unwrap().records.is_empty());
    }
}
