use crate::geometry::Polygon;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::GeometryParams;
use crate::operations::region::FillRegion;

use super::IsSingular;

/// Computes the enclosed area of a polygon.
///
/// A singular polygon uses the shoelace formula. Any other polygon (stitched
/// holes, lobes, self-overlaps) is measured through its nonzero-winding fill
/// region, so overlapping parts count once and the result does not depend on
/// the orientation of the points.
pub struct Area<'a> {
    polygon: &'a Polygon,
    params: GeometryParams,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query with default tolerances.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            params: GeometryParams::default(),
        }
    }

    /// Sets custom tolerances for the fill-region computation.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning an area `>= 0`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        if self.polygon.len() < 3 {
            return 0.0;
        }
        if IsSingular::new(self.polygon)
            .with_params(self.params)
            .execute()
        {
            signed_area_2d(&self.polygon.points).abs()
        } else {
            FillRegion::from_polygon(self.polygon, self.params).area()
        }
    }
}

/// Raw shoelace area: positive for counter-clockwise points.
pub struct SignedArea<'a> {
    polygon: &'a Polygon,
}

impl<'a> SignedArea<'a> {
    /// Creates a new `SignedArea` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query; counter-clockwise polygons give a positive value.
    #[must_use]
    pub fn execute(&self) -> f64 {
        signed_area_2d(&self.polygon.points)
    }
}
