use crate::flow::NetMigration;

/// Regions gaining more than this many people from the reference region get an outbound arc.
pub const OUTBOUND_THRESHOLD: f64 = 10000.0;

/// Regions losing more than 4500 people to the reference region get an inbound arc.
pub const INBOUND_THRESHOLD: f64 = -4500.0;

#[inline]
pub fn is_outbound_heavy<T: NetMigration + ?Sized>(item: &T, reference: &str) -> bool {
    item.name() != reference && item.difference().is_some_and(|d| d > OUTBOUND_THRESHOLD)
}

#[inline]
pub fn is_inbound_heavy<T: NetMigration + ?Sized>(item: &T, reference: &str) -> bool {
    item.name() != reference && item.difference().is_some_and(|d| d < INBOUND_THRESHOLD)
}

/// Regions that get a reference → region arc, in input order.
pub fn outbound_set<'a, T: NetMigration>(items: &'a [T], reference: &str) -> Vec<&'a T> {
    items.iter().filter(|item| is_outbound_heavy(*item, reference)).collect()
}

/// Regions that get a region → reference arc, in input order.
pub fn inbound_set<'a, T: NetMigration>(items: &'a [T], reference: &str) -> Vec<&'a T> {
    items.iter().filter(|item| is_inbound_heavy(*item, reference)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, Option<f64>);

    impl NetMigration for Item {
        fn name(&self) -> &str { self.0 }
        fn difference(&self) -> Option<f64> { self.1 }
    }

    const CA: &str = "California";

    fn names<T: NetMigration>(items: &[&T]) -> Vec<String> {
        items.iter().map(|item| item.name().to_string()).collect()
    }

    fn items() -> Vec<Item> {
        vec![
            Item("Texas", Some(20_000.0)),
            Item("New York", Some(-10_000.0)),
            Item("California", Some(1e6)),
            Item("Oregon", None),
            Item("Nevada", Some(10_000.0)),
            Item("Ohio", Some(-4_500.0)),
            Item("Utah", Some(f64::NAN)),
            Item("Arizona", Some(10_000.5)),
            Item("Maine", Some(-4_500.5)),
        ]
    }

    #[test]
    fn thresholds_are_strict() {
        let items = items();
        assert_eq!(names(&outbound_set(&items, CA)), ["Texas", "Arizona"]);
        assert_eq!(names(&inbound_set(&items, CA)), ["New York", "Maine"]);
    }

    #[test]
    fn reference_is_never_in_either_set() {
        let items = vec![Item(CA, Some(50_000.0)), Item(CA, Some(-50_000.0))];
        assert!(outbound_set(&items, CA).is_empty());
        assert!(inbound_set(&items, CA).is_empty());
    }

    #[test]
    fn sets_are_disjoint() {
        let items = items();
        let outbound = names(&outbound_set(&items, CA));
        let inbound = names(&inbound_set(&items, CA));
        assert!(outbound.iter().all(|name| !inbound.contains(name)));
    }

    #[test]
    fn unset_and_nan_are_excluded() {
        let items = items();
        let all: Vec<String> = names(&outbound_set(&items, CA)).into_iter()
            .chain(names(&inbound_set(&items, CA)))
            .collect();
        assert!(!all.contains(&"Oregon".to_string()));
        assert!(!all.contains(&"Utah".to_string()));
    }
}
