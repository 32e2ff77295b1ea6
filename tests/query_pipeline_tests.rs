//! Query pipeline tests against the bundled dataset
//!
//! These tests verify that:
//! - Each filter keeps exactly the matching subset in load order
//! - Sorting is stable and limit applies last
//! - Invalid parameter values are reported with their exact text

use todos::prelude::*;

const DATA_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/todos.json");

fn store() -> InMemoryTodoStore {
    InMemoryTodoStore::from_file(DATA_FILE).expect("bundled data should load")
}

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    QueryParams::from_pairs(pairs.iter().copied())
}

fn list(store: &InMemoryTodoStore, pairs: &[(&str, &str)]) -> Vec<Todo> {
    store.list_todos(&params(pairs)).expect("query should succeed")
}

fn list_err(store: &InMemoryTodoStore, pairs: &[(&str, &str)]) -> QueryError {
    match store.list_todos(&params(pairs)) {
        Err(TodoError::Query(e)) => e,
        other => panic!("expected a query error, got {:?}", other),
    }
}

// =============================================================================
// Store
// =============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_bundled_data_size() {
        assert_eq!(store().size(), 60);
    }

    #[test]
    fn test_get_todo_with_known_id() {
        let store = store();
        let todo = store.get_todo("58895985c2fc014023fbc272").unwrap();
        assert_eq!(
            todo.body,
            "Velit ut amet esse esse. Pariatur quis aute minim incididunt."
        );
        assert_eq!(&todo, store.by_id("58895985c2fc014023fbc272").unwrap());
    }

    #[test]
    fn test_get_todo_with_unknown_id() {
        let err = store().get_todo("ThisIDWon'tExist").unwrap_err();
        assert_eq!(err.to_string(), "No todo with id ThisIDWon'tExist was found.");
    }

    #[test]
    fn test_every_todo_is_reachable_by_id() {
        let store = store();
        for todo in store.all() {
            assert_eq!(store.by_id(&todo.id), Some(todo));
        }
    }
}

// =============================================================================
// Filters
// =============================================================================

mod filter_tests {
    use super::*;

    #[test]
    fn test_no_filters_returns_everything_in_load_order() {
        let store = store();
        assert_eq!(list(&store, &[]), store.all());
    }

    #[test]
    fn test_unrecognized_parameters_change_nothing() {
        let store = store();
        assert_eq!(list(&store, &[("age", "25"), ("company", "OHMNET")]), store.all());
    }

    #[test]
    fn test_category_filter_is_exact_subset() {
        let store = store();
        let expected: Vec<Todo> = store
            .all()
            .iter()
            .filter(|t| t.category == "software design")
            .cloned()
            .collect();

        let todos = list(&store, &[("category", "software design")]);
        assert!(!todos.is_empty());
        assert_eq!(todos, expected);
    }

    #[test]
    fn test_owner_filter() {
        let todos = list(&store(), &[("owner", "Roberta")]);
        assert!(!todos.is_empty());
        assert!(todos.iter().all(|t| t.owner == "Roberta"));
    }

    #[test]
    fn test_owner_and_category_in_either_order() {
        let store = store();
        let a = list(&store, &[("owner", "Roberta"), ("category", "software design")]);
        let b = list(&store, &[("category", "software design"), ("owner", "Roberta")]);
        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_status_complete() {
        let todos = list(&store(), &[("status", "complete")]);
        assert_eq!(todos.len(), 33);
        assert!(todos.iter().all(|t| t.completed));
    }

    #[test]
    fn test_status_incomplete() {
        let todos = list(&store(), &[("status", "incomplete")]);
        assert_eq!(todos.len(), 27);
        assert!(todos.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_contains_single() {
        let todos = list(&store(), &[("contains", " eu ")]);
        assert!(!todos.is_empty());
        assert!(todos.iter().all(|t| t.body.contains(" eu ")));
    }

    #[test]
    fn test_contains_multiple() {
        let todos = list(&store(), &[("contains", " eu "), ("contains", " et ")]);
        assert_eq!(todos.len(), 4);
        for todo in &todos {
            assert!(todo.body.contains(" eu "));
            assert!(todo.body.contains(" et "));
        }
    }
}

// =============================================================================
// Sorting and limiting
// =============================================================================

mod order_and_limit_tests {
    use super::*;

    fn assert_sorted_by<K: Ord>(todos: &[Todo], key: impl Fn(&Todo) -> K) {
        let mut expected = todos.to_vec();
        expected.sort_by_key(|t| key(t));
        assert_eq!(todos, expected.as_slice());
    }

    #[test]
    fn test_sort_by_each_attribute() {
        let store = store();
        assert_sorted_by(&list(&store, &[("orderBy", "category")]), |t| t.category.clone());
        assert_sorted_by(&list(&store, &[("orderBy", "body")]), |t| t.body.clone());
        assert_sorted_by(&list(&store, &[("orderBy", "status")]), |t| t.completed);
        assert_sorted_by(&list(&store, &[("orderBy", "owner")]), |t| t.owner.clone());
    }

    #[test]
    fn test_sort_ties_keep_load_order() {
        let store = store();
        let sorted = list(&store, &[("orderBy", "owner")]);

        let position = |id: &str| store.all().iter().position(|t| t.id == id).unwrap();
        for pair in sorted.windows(2) {
            if pair[0].owner == pair[1].owner {
                assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }

    #[test]
    fn test_sort_is_idempotent() {
        let store = store();
        let once = list(&store, &[("orderBy", "owner")]);
        let resorted = pipeline::sort_by(once.iter().collect(), SortAttribute::Owner);
        assert_eq!(resorted.into_iter().cloned().collect::<Vec<_>>(), once);
    }

    #[test]
    fn test_limit_lengths() {
        let store = store();
        for n in [0usize, 1, 7, 60, 61, 1000] {
            let limit = n.to_string();
            assert_eq!(list(&store, &[("limit", limit.as_str())]).len(), n.min(60));
        }
    }

    #[test]
    fn test_status_with_limit_takes_first_in_load_order() {
        let store = store();
        let expected: Vec<Todo> = store
            .all()
            .iter()
            .filter(|t| t.completed)
            .take(5)
            .cloned()
            .collect();
        assert_eq!(list(&store, &[("status", "complete"), ("limit", "5")]), expected);
    }

    #[test]
    fn test_combination() {
        let todos = list(
            &store(),
            &[
                ("orderBy", "category"),
                ("status", "complete"),
                ("owner", "Blanche"),
                ("limit", "12"),
            ],
        );
        assert!(todos.len() <= 12);
        assert!(todos.iter().all(|t| t.completed && t.owner == "Blanche"));
        assert_sorted_by(&todos, |t| t.category.clone());
    }
}

// =============================================================================
// Validation
// =============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_illegal_status() {
        let err = list_err(&store(), &[("status", "hello")]);
        assert_eq!(err.parameter(), QueryParameter::Status);
        assert_eq!(
            err.to_string(),
            "Specified status 'hello' is not 'complete' or 'incomplete'"
        );
    }

    #[test]
    fn test_illegal_limit() {
        let err = list_err(&store(), &[("limit", "abc")]);
        assert_eq!(err.value(), "abc");
        assert_eq!(err.to_string(), "Specified limit 'abc' can't be parsed to an integer");
    }

    #[test]
    fn test_negative_limit() {
        let err = list_err(&store(), &[("limit", "-3")]);
        assert_eq!(err.parameter(), QueryParameter::Limit);
        assert_eq!(err.value(), "-3");
    }

    #[test]
    fn test_illegal_order_attribute() {
        let err = list_err(&store(), &[("orderBy", "abc")]);
        assert_eq!(err.to_string(), "Cannot sort by attribute 'abc'");
    }

    #[test]
    fn test_earlier_stage_error_wins() {
        let err = list_err(
            &store(),
            &[("limit", "abc"), ("orderBy", "abc"), ("status", "hello")],
        );
        assert_eq!(err.parameter(), QueryParameter::Status);
    }

    #[test]
    fn test_filters_do_not_excuse_invalid_status() {
        // even an empty filtered set still validates status
        let err = list_err(&store(), &[("owner", "Nobody"), ("status", "done")]);
        assert_eq!(err.parameter(), QueryParameter::Status);
    }
}
