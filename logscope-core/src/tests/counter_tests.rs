use crate::counter::OrderedCounter;
use pretty_assertions::assert_eq;

#[test]
fn ranks_by_descending_count() {
    // Arrange
    let mut counter = OrderedCounter::new();
    for key in ["a", "b", "b", "c", "c", "c"] {
        counter.increment(key);
    }

    // Act
    let ranked = counter.into_ranked();

    // Assert
    assert_eq!(ranked, vec![("c", 3), ("b", 2), ("a", 1)]);
}

#[test]
fn ties_keep_first_seen_order() {
    // Arrange: a and b tie at 3, c wins with 5; observation order a, b, c.
    let mut counter = OrderedCounter::new();
    for key in ["a", "a", "a", "b", "b", "b", "c", "c", "c", "c", "c"] {
        counter.increment(key);
    }

    // Act
    let ranked = counter.into_ranked();

    // Assert
    assert_eq!(ranked, vec![("c", 5), ("a", 3), ("b", 3)]);
}

#[test]
fn top_truncates_after_ranking() {
    // Arrange
    let mut counter = OrderedCounter::new();
    for key in ["x", "y", "y", "z", "z", "z"] {
        counter.increment(key);
    }

    // Act
    let top = counter.into_top(2);

    // Assert
    assert_eq!(top, vec![("z", 3), ("y", 2)]);
}
