//! Read access to the location knowledge base.
//!
//! The [`LocationStore`] trait is the seam between the recommender and
//! whatever holds the records. [`Catalog`] scans a vector linearly;
//! [`IndexedCatalog`] answers rectangle queries from an R\*-tree. Both report
//! each record's position in the underlying list so callers can break ties
//! the same way regardless of backend.

use geo::{Coord, Intersects, Rect};
#[cfg(feature = "spatial-index")]
use rstar::{AABB, RTree, RTreeObject};

use crate::LocationRecord;

/// A record borrowed from a store, tagged with its catalogue position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredLocation<'a> {
    /// Zero-based position in the store's declaration order.
    pub position: usize,
    /// The record itself.
    pub record: &'a LocationRecord,
}

/// Read-only access to location records.
///
/// Iterators yield records in ascending `position` order.
///
/// # Examples
/// ```
/// use geo::{Coord, Rect};
/// use spotradar_core::{Catalog, Category, GeoPoint, LocationRecord, LocationStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let record = LocationRecord::new(
///     "Cileunyi Terminal",
///     Category::Transport,
///     GeoPoint::new(-6.9389, 107.7512)?,
///     [6, 17],
/// )?;
/// let catalog = Catalog::new(vec![record]);
/// let bbox = Rect::new(Coord { x: 107.7, y: -7.0 }, Coord { x: 107.8, y: -6.9 });
/// assert_eq!(catalog.locations_in_bbox(&bbox).count(), 1);
/// # Ok(())
/// # }
/// ```
pub trait LocationStore {
    /// Every record in the store.
    fn locations(&self) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_>;

    /// Records whose coordinates fall within `bbox`.
    ///
    /// The rectangle is in (longitude, latitude) degrees and boundary points
    /// count as inside. Rectangles crossing the antimeridian are not modelled.
    fn locations_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_>;

    /// Number of records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> LocationStore for &S
where
    S: LocationStore + ?Sized,
{
    fn locations(&self) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_> {
        (**self).locations()
    }

    fn locations_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_> {
        (**self).locations_in_bbox(bbox)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// An ordered list of records queried by linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    records: Vec<LocationRecord>,
}

impl Catalog {
    /// Wrap records in declaration order.
    #[must_use]
    pub const fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    /// Records in declaration order.
    #[must_use]
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Record at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&LocationRecord> {
        self.records.get(position)
    }

    fn stored(&self) -> impl Iterator<Item = StoredLocation<'_>> + Send + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(position, record)| StoredLocation { position, record })
    }
}

impl FromIterator<LocationRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = LocationRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<LocationRecord>> for Catalog {
    fn from(records: Vec<LocationRecord>) -> Self {
        Self::new(records)
    }
}

impl LocationStore for Catalog {
    fn locations(&self) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_> {
        Box::new(self.stored())
    }

    fn locations_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_> {
        let bbox = *bbox;
        Box::new(
            self.stored()
                // `Intersects` treats boundary points as inside the rectangle.
                .filter(move |stored| bbox.intersects(&Coord::from(stored.record.location()))),
        )
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Point entry held by the R\*-tree: a catalogue position and its
/// (longitude, latitude) pair.
#[cfg(feature = "spatial-index")]
#[derive(Debug, Clone, Copy, PartialEq)]
struct IndexEntry {
    position: usize,
    point: [f64; 2],
}

#[cfg(feature = "spatial-index")]
impl RTreeObject for IndexEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// A [`Catalog`] with an R\*-tree over record coordinates.
///
/// Rectangle queries visit only nearby records, which pays off once the
/// knowledge base grows past a few hundred entries.
#[cfg(feature = "spatial-index")]
#[cfg_attr(docsrs, doc(cfg(feature = "spatial-index")))]
#[derive(Clone)]
pub struct IndexedCatalog {
    catalog: Catalog,
    index: RTree<IndexEntry>,
}

#[cfg(feature = "spatial-index")]
impl IndexedCatalog {
    /// Bulk-load an index over `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let entries = catalog
            .stored()
            .map(|stored| {
                let coord = Coord::from(stored.record.location());
                IndexEntry {
                    position: stored.position,
                    point: [coord.x, coord.y],
                }
            })
            .collect();
        Self {
            index: RTree::bulk_load(entries),
            catalog,
        }
    }
}

#[cfg(feature = "spatial-index")]
impl std::fmt::Debug for IndexedCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedCatalog")
            .field("records", &self.catalog.records.len())
            .field("indexed", &self.index.size())
            .finish()
    }
}

#[cfg(feature = "spatial-index")]
impl From<Catalog> for IndexedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

#[cfg(feature = "spatial-index")]
impl LocationStore for IndexedCatalog {
    fn locations(&self) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_> {
        self.catalog.locations()
    }

    fn locations_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = StoredLocation<'_>> + Send + '_> {
        let envelope =
            AABB::from_corners([bbox.min().x, bbox.min().y], [bbox.max().x, bbox.max().y]);
        let mut positions: Vec<usize> = self
            .index
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.position)
            .collect();
        // Tree traversal order is arbitrary; restore declaration order.
        positions.sort_unstable();
        Box::new(positions.into_iter().filter_map(|position| {
            self.catalog
                .get(position)
                .map(|record| StoredLocation { position, record })
        }))
    }

    fn len(&self) -> usize {
        self.catalog.len()
    }
}
