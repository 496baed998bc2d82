//! Property tests over arbitrary seeds and run lengths

use proptest::prelude::*;
use video_rental_sim::model::customer::Archetype;
use video_rental_sim::model::item::ItemId;
use video_rental_sim::model::rental::RentalStatus;
use video_rental_sim::simulation::config::SimulationConfig;
use video_rental_sim::simulation::engine::Store;

fn store(seed: u64) -> Store {
    Store::new(SimulationConfig::default().with_seed(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_item_is_in_exactly_one_place(seed in any::<u64>(), days in 0u32..80) {
        let mut store = store(seed);
        let all: Vec<ItemId> = store.catalog().ids().collect();

        for _ in 0..days {
            store.step();
            let mut held = store.accounted_items();
            held.sort();
            prop_assert_eq!(&held, &all);
        }
    }

    #[test]
    fn revenue_is_monotonic(seed in any::<u64>()) {
        let mut store = store(seed);
        let mut last = store.total_revenue();

        for _ in 0..50 {
            store.step();
            prop_assert!(store.total_revenue() >= last);
            last = store.total_revenue();
        }
    }

    #[test]
    fn rentals_return_exactly_on_return_day(seed in any::<u64>()) {
        let mut store = store(seed);
        store.run(60);

        for record in store.rental_log() {
            let due = record.rental.return_day();
            match record.status {
                RentalStatus::Returned { day } => prop_assert_eq!(day, due),
                RentalStatus::Active => prop_assert!(due > store.current_day()),
            }
        }
    }

    #[test]
    fn rentals_respect_archetype_bounds(seed in any::<u64>()) {
        let mut store = store(seed);
        store.run(60);

        for record in store.rental_log() {
            let rental = &record.rental;
            let items = rental.items.len();
            match store.customers()[rental.customer.0].archetype {
                Archetype::Breezy => {
                    prop_assert!((1..=2).contains(&items));
                    prop_assert!((1..=2).contains(&rental.nights));
                }
                Archetype::Hoarder => {
                    prop_assert_eq!(items, 3);
                    prop_assert_eq!(rental.nights, 7);
                }
                Archetype::Regular => {
                    prop_assert!((1..=3).contains(&items));
                    prop_assert!((3..=5).contains(&rental.nights));
                }
            }
        }
    }

    #[test]
    fn zero_days_is_a_no_op(seed in any::<u64>()) {
        let mut store = store(seed);
        store.run(0);

        prop_assert_eq!(store.inventory().len(), store.catalog().len());
        prop_assert_eq!(store.total_revenue(), 0.0);
    }
}
