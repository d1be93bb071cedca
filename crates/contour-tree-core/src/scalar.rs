//! Total ordering over the scalar field.
//!
//! A contour tree is only defined for a *strict* total order on vertices
//! (simulation of simplicity, §4.C). Plain `f32`/`f64` only have a partial
//! order (`NaN` compares unordered), so vertex sorting is expressed against
//! this trait instead of `Ord` directly.

use core::cmp::Ordering;

/// A type that admits a total order, used to rank scalar field values.
///
/// Grounded in the same shape as the teacher's `shortest_paths::TotalOrd`
/// used to compare edge weights generically in Kruskal's algorithm.
pub trait TotalOrd {
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_total_ord_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl TotalOrd for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_total_ord_via_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl TotalOrd for f32 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl TotalOrd for f64 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}
