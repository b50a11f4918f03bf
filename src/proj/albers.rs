use anyhow::{anyhow, Context, Result};
use geo::{Coord, CoordsIter, MapCoords, MultiPolygon, Polygon, Rect};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::config::ProjectionConfig;

/// Radius of the sphere the conics are evaluated on; output is normalized back to a unit sphere.
const SPHERE_RADIUS: f64 = 6_370_997.0;

const EPSILON: f64 = 1e-6;

#[inline]
fn sphere_proj4(proj: &str) -> String {
    format!("{proj} +a={SPHERE_RADIUS} +b={SPHERE_RADIUS} +units=m +no_defs")
}

/// Albers equal-area conic, positioned so that `center` lands on `translate`.
struct Conic {
    proj: Proj4,
    scale: f64,
    translate: Coord<f64>,
    center: Coord<f64>,
}

impl Conic {
    fn new(
        geographic: &Proj4,
        parallels: (f64, f64),
        lon_0: f64,
        center: (f64, f64),
        scale: f64,
        translate: Coord<f64>,
    ) -> Result<Self> {
        let proj = {
            let proj_string = sphere_proj4(&format!(
                "+proj=aea +lat_1={} +lat_2={} +lat_0=0 +lon_0={lon_0} +x_0=0 +y_0=0",
                parallels.0, parallels.1,
            ));
            Proj4::from_proj_string(&proj_string)
                .with_context(|| anyhow!("failed to build conic PROJ.4: {proj_string}"))?
        };

        let mut conic = Self { proj, scale, translate, center: Coord { x: 0.0, y: 0.0 } };
        conic.center = conic.raw(geographic, Coord { x: center.0, y: center.1 })
            .ok_or_else(|| anyhow!("failed to project conic center {center:?}"))?;
        Ok(conic)
    }

    /// lon/lat in degrees → unit-sphere plane coordinates.
    fn raw(&self, geographic: &Proj4, coord: Coord<f64>) -> Option<Coord<f64>> {
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        transform(geographic, &self.proj, &mut point).ok()?;
        let out = Coord { x: point.0 / SPHERE_RADIUS, y: point.1 / SPHERE_RADIUS };
        (out.x.is_finite() && out.y.is_finite()).then_some(out)
    }

    /// lon/lat in degrees → SVG pixels (y down).
    fn project(&self, geographic: &Proj4, coord: Coord<f64>) -> Option<Coord<f64>> {
        let raw = self.raw(geographic, coord)?;
        Some(Coord {
            x: self.translate.x + self.scale * (raw.x - self.center.x),
            y: self.translate.y - self.scale * (raw.y - self.center.y),
        })
    }
}

/// A conic plus the pixel extent it is allowed to draw into.
struct Inset {
    conic: Conic,
    extent: Rect<f64>,
}

impl Inset {
    /// Project `coord` if it lands inside this inset's extent.
    fn project(&self, geographic: &Proj4, coord: Coord<f64>) -> Option<Coord<f64>> {
        let p = self.conic.project(geographic, coord)?;
        let (min, max) = (self.extent.min(), self.extent.max());
        (p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y).then_some(p)
    }
}

/// Composite projection of the United States: conterminous states on an Albers conic,
/// with Alaska (shrunk) and Hawaii drawn as insets below the southwest.
pub struct AlbersUsa {
    geographic: Proj4,
    lower48: Inset,
    alaska: Inset,
    hawaii: Inset,
}

impl AlbersUsa {
    pub fn new(config: &ProjectionConfig) -> Result<Self> {
        let geographic = {
            let proj_string = sphere_proj4("+proj=longlat");
            Proj4::from_proj_string(&proj_string)
                .with_context(|| anyhow!("failed to build source PROJ.4: {proj_string}"))?
        };

        let k = config.scale;
        let [x, y] = config.translate;
        let rect = |x0: f64, y0: f64, x1: f64, y1: f64| Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 });

        let lower48 = Inset {
            conic: Conic::new(&geographic, (29.5, 45.5), -96.0, (-96.6, 38.7), k, Coord { x, y })?,
            extent: rect(x - 0.455 * k, y - 0.238 * k, x + 0.455 * k, y + 0.238 * k),
        };
        let alaska = Inset {
            conic: Conic::new(&geographic, (55.0, 65.0), -154.0, (-156.0, 58.5), k * 0.35,
                Coord { x: x - 0.307 * k, y: y + 0.201 * k })?,
            extent: rect(x - 0.425 * k + EPSILON, y + 0.120 * k + EPSILON, x - 0.214 * k - EPSILON, y + 0.234 * k - EPSILON),
        };
        let hawaii = Inset {
            conic: Conic::new(&geographic, (8.0, 18.0), -157.0, (-160.0, 19.9), k,
                Coord { x: x - 0.205 * k, y: y + 0.212 * k })?,
            extent: rect(x - 0.214 * k + EPSILON, y + 0.166 * k + EPSILON, x - 0.115 * k - EPSILON, y + 0.234 * k - EPSILON),
        };

        Ok(Self { geographic, lower48, alaska, hawaii })
    }

    fn insets(&self) -> [&Inset; 3] { [&self.lower48, &self.alaska, &self.hawaii] }

    /// The first inset (lower 48, Alaska, Hawaii) whose extent contains `coord`.
    fn inset_for(&self, coord: Coord<f64>) -> Option<&Inset> {
        self.insets().into_iter().find(|inset| inset.project(&self.geographic, coord).is_some())
    }

    /// Project a single lon/lat coordinate, or `None` if it falls outside every inset.
    pub fn project(&self, coord: Coord<f64>) -> Option<Coord<f64>> {
        self.insets().into_iter().find_map(|inset| inset.project(&self.geographic, coord))
    }

    /// Project a polygon entirely through the inset chosen by its first exterior vertex.
    /// The polygon is not clipped to that inset's extent, so a shape straddling an inset
    /// boundary (some Aleutian islands) is drawn whole by one conic instead of being split.
    pub fn project_polygon(&self, polygon: &Polygon<f64>) -> Option<Polygon<f64>> {
        let first = polygon.exterior().0.first().copied()?;
        let inset = self.inset_for(first)?;

        let projected = polygon.map_coords(|coord| {
            inset.conic.project(&self.geographic, coord)
                .unwrap_or(Coord { x: f64::NAN, y: f64::NAN })
        });
        projected.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite()).then_some(projected)
    }

    /// Project every polygon; polygons outside all insets are dropped.
    pub fn project_multipolygon(&self, shape: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        MultiPolygon(shape.0.iter().filter_map(|polygon| self.project_polygon(polygon)).collect())
    }
}
