use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// A tally counter.
#[derive(Debug, Clone)]
pub struct Counter<T>
where
  T: Hash + PartialEq + Eq + PartialOrd + Ord + Clone + Display,
{
  map: HashMap<T, usize>,
}

impl<T> Counter<T>
where
  T: Hash + PartialEq + Eq + PartialOrd + Ord + Clone + Display,
{
  /// Makes an empty counter
  pub fn mk_empty() -> Self {
    Counter {
      map: HashMap::<T, usize>::new(),
    }
  }

  /// Inserts an element into the counter.
  pub fn insert(&mut self, elt: &T) {
    *self.map.entry(elt.clone()).or_insert(0) += 1;
  }

  /// Returns the count of some element.
  pub fn count(&self, elt: &T) -> usize {
    *self.map.get(elt).unwrap_or(&0)
  }

  /// Number of distinct elements counted at least once.
  pub fn distinct(&self) -> usize {
    self.map.len()
  }

  /// Total number of insertions.
  pub fn total(&self) -> usize {
    self.map.values().sum()
  }

  /// Returns the elements sorted by descending count, ties broken by
  /// ascending element.
  pub fn most_common(&self) -> Vec<(&T, usize)> {
    let mut v: Vec<(&T, usize)> =
      self.map.iter().map(|(x, c)| (x, *c)).collect();
    v.sort_by(|(x1, c1), (x2, c2)| c2.cmp(c1).then(x1.cmp(x2)));
    v
  }
}

impl<T> Display for Counter<T>
where
  T: Hash + PartialEq + Eq + PartialOrd + Ord + Clone + Display,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{{")?;
    for (x, c) in self.most_common() {
      write!(f, "{}={}, ", x, c)?;
    }
    write!(f, "}}")
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::Counter;

  #[test]
  fn counter_effect() {
    let mut ct = Counter::<i32>::mk_empty();
    ct.insert(&233);
    ct.insert(&666);
    ct.insert(&233);

    assert!((0, 1, 2) == (ct.count(&251), ct.count(&666), ct.count(&233)));
    assert_eq!((ct.distinct(), ct.total()), (2, 3));
  }

  #[test]
  fn most_common_first() {
    let mut ct = Counter::<i32>::mk_empty();
    for x in &[3, 1, 3, 2, 1, 3] {
      ct.insert(x);
    }
    assert_eq!(ct.most_common(), vec![(&3, 3), (&1, 2), (&2, 1)]);
    assert_eq!(ct.to_string(), "{3=3, 1=2, 2=1, }");
  }
}
