//! The illustrative map used by the CLI driver and tests.

use crate::component::{Composite, Leaf, MapComponent};

/// Builds the demo map: two city composites with a few points of interest.
///
/// ```text
/// root (0,0)
/// ├── city1 (10,10)
/// │   ├── Supermarket (1,1)
/// │   └── Market (3,3)
/// └── city2 (20,20)
///     └── Bank (2,2)
/// ```
pub fn demo_map() -> MapComponent {
    let mut city1 = Composite::new(10, 10);
    city1.add_child(Leaf::new("Supermarket", 1, 1));
    city1.add_child(Leaf::new("Market", 3, 3));

    let mut city2 = Composite::new(20, 20);
    city2.add_child(Leaf::new("Bank", 2, 2));

    let mut map = Composite::new(0, 0);
    map.add_child(city1);
    map.add_child(city2);
    map.into()
}
