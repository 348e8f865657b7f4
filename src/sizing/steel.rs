//! AISC wide-flange catalogs for steel frames

use log::warn;

use super::{BeamDemand, ColumnDemand, SectionSizer};
use crate::elements::{Material, Section};
use crate::error::{GenError, GenResult};

/// Resistance factor for flexural yielding
const PHI_B: f64 = 0.9;
/// Fraction of squash load reserved for gravity axial load
const AXIAL_UTILIZATION: f64 = 0.4;
/// Strong-column / weak-beam plastic modulus ratio
const SCWB_RATIO: f64 = 1.2;

/// Ordered catalogs of W-shapes, lightest first
#[derive(Debug, Clone)]
pub struct SteelCatalog {
    pub columns: Vec<Section>,
    pub beams: Vec<Section>,
}

impl Default for SteelCatalog {
    fn default() -> Self {
        Self {
            columns: w14_columns(),
            beams: w_beams(),
        }
    }
}

impl SteelCatalog {
    /// First entry meeting `fits`, or the heaviest entry
    fn select(catalog: &[Section], kind: &str, fits: impl Fn(&Section) -> bool) -> GenResult<Section> {
        if let Some(section) = catalog.iter().find(|&s| fits(s)) {
            return Ok(section.clone());
        }
        let largest = catalog.last().ok_or_else(|| {
            GenError::invalid("sectionCatalog", format!("{} catalog is empty", kind))
        })?;
        warn!("{} demand exceeds catalog, using {}", kind, largest.name);
        Ok(largest.clone())
    }
}

impl SectionSizer for SteelCatalog {
    fn size_beam(&self, demand: &BeamDemand, material: &Material) -> GenResult<Section> {
        let zx_req = demand.moment() / (PHI_B * material.fy);
        let ix_req = demand.required_ix(material.e);
        Self::select(&self.beams, "Beam", |s| s.zx >= zx_req && s.ix >= ix_req)
    }

    fn size_column(
        &self,
        demand: &ColumnDemand,
        beams: &[&Section],
        material: &Material,
    ) -> GenResult<Section> {
        let area_req = demand.axial() / (AXIAL_UTILIZATION * material.fy);
        let beam_zx = beams.iter().map(|b| b.zx).fold(0.0, f64::max);
        let zx_req = SCWB_RATIO * beam_zx;
        Self::select(&self.columns, "Column", |s| s.area >= area_req && s.zx >= zx_req)
    }
}

fn w14_columns() -> Vec<Section> {
    vec![
        Section::w_shape("W14x48", 14.1, 13.8, 8.03, 0.340, 0.595, 484.0, 78.4, 51.4),
        Section::w_shape("W14x61", 17.9, 13.9, 10.0, 0.375, 0.645, 640.0, 102.0, 107.0),
        Section::w_shape("W14x74", 21.8, 14.2, 10.1, 0.450, 0.785, 795.0, 126.0, 134.0),
        Section::w_shape("W14x90", 26.5, 14.0, 14.5, 0.440, 0.710, 999.0, 157.0, 362.0),
        Section::w_shape("W14x109", 32.0, 14.3, 14.6, 0.525, 0.860, 1240.0, 192.0, 447.0),
        Section::w_shape("W14x132", 38.8, 14.66, 14.725, 0.645, 1.03, 1530.0, 234.0, 548.0),
        Section::w_shape("W14x159", 46.7, 15.0, 15.6, 0.745, 1.19, 1900.0, 287.0, 748.0),
        Section::w_shape("W14x193", 56.8, 15.5, 15.7, 0.890, 1.44, 2400.0, 355.0, 931.0),
        Section::w_shape("W14x233", 68.5, 16.0, 15.9, 1.07, 1.72, 3010.0, 436.0, 1150.0),
        Section::w_shape("W14x283", 83.3, 16.7, 16.1, 1.29, 2.07, 3840.0, 542.0, 1440.0),
        Section::w_shape("W14x342", 101.0, 17.5, 16.4, 1.54, 2.47, 4900.0, 672.0, 1810.0),
        Section::w_shape("W14x398", 117.0, 18.3, 16.6, 1.77, 2.85, 6000.0, 801.0, 2170.0),
        Section::w_shape("W14x455", 134.0, 19.0, 16.8, 2.02, 3.21, 7190.0, 936.0, 2560.0),
        Section::w_shape("W14x550", 162.0, 20.2, 17.2, 2.38, 3.82, 9430.0, 1180.0, 3250.0),
        Section::w_shape("W14x665", 196.0, 21.6, 17.7, 2.83, 4.52, 12400.0, 1480.0, 4170.0),
        Section::w_shape("W14x730", 215.0, 22.4, 17.9, 3.07, 4.91, 14300.0, 1660.0, 4720.0),
    ]
}

fn w_beams() -> Vec<Section> {
    vec![
        Section::w_shape("W12x26", 7.65, 12.2, 6.49, 0.230, 0.380, 204.0, 37.2, 17.3),
        Section::w_shape("W14x30", 8.85, 13.8, 6.73, 0.270, 0.385, 291.0, 47.3, 19.6),
        Section::w_shape("W16x31", 9.13, 15.9, 5.53, 0.275, 0.440, 375.0, 54.0, 12.4),
        Section::w_shape("W18x35", 10.3, 17.7, 6.00, 0.300, 0.425, 510.0, 66.5, 15.3),
        Section::w_shape("W18x50", 14.7, 18.0, 7.50, 0.355, 0.570, 800.0, 101.0, 40.1),
        Section::w_shape("W21x50", 14.7, 20.8, 6.53, 0.380, 0.535, 984.0, 110.0, 24.9),
        Section::w_shape("W21x62", 18.3, 21.0, 8.24, 0.400, 0.615, 1330.0, 144.0, 57.5),
        Section::w_shape("W24x68", 20.1, 23.73, 8.965, 0.415, 0.585, 1830.0, 177.0, 70.4),
        Section::w_shape("W24x84", 24.7, 24.1, 9.02, 0.470, 0.770, 2370.0, 224.0, 94.4),
        Section::w_shape("W27x94", 27.7, 26.9, 10.0, 0.490, 0.745, 3270.0, 278.0, 124.0),
        Section::w_shape("W30x108", 31.7, 29.8, 10.5, 0.545, 0.760, 4470.0, 346.0, 146.0),
        Section::w_shape("W33x130", 38.3, 33.1, 11.5, 0.580, 0.855, 6710.0, 467.0, 218.0),
        Section::w_shape("W36x150", 44.3, 35.9, 12.0, 0.625, 0.940, 9040.0, 581.0, 270.0),
        Section::w_shape("W40x199", 58.8, 38.7, 15.8, 0.650, 1.07, 14900.0, 869.0, 695.0),
        Section::w_shape("W44x262", 77.2, 43.3, 15.8, 0.785, 1.42, 24100.0, 1100.0, 923.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const PSF_75: f64 = 75.0 / 1000.0 / 144.0;

    fn beam_demand(span_ft: f64, trib_ft: f64) -> BeamDemand {
        BeamDemand {
            span: span_ft * 12.0,
            tributary_width: trib_ft * 12.0,
            floor_pressure: PSF_75,
        }
    }

    fn column_demand(stories: usize) -> ColumnDemand {
        ColumnDemand {
            stories,
            tributary_area: 360.0 * 360.0,
            floor_pressure: PSF_75,
        }
    }

    #[test]
    fn test_catalogs_are_ordered() {
        let catalog = SteelCatalog::default();
        for list in [&catalog.columns, &catalog.beams] {
            for pair in list.windows(2) {
                assert!(pair[0].ix < pair[1].ix, "{} / {}", pair[0].name, pair[1].name);
                assert!(pair[0].zx < pair[1].zx, "{} / {}", pair[0].name, pair[1].name);
                assert!(pair[0].area <= pair[1].area, "{} / {}", pair[0].name, pair[1].name);
            }
        }
    }

    #[test]
    fn test_office_bay_selects_w24x68_and_w14x132() {
        let catalog = SteelCatalog::default();
        let steel = Material::steel(1);
        let beam = catalog.size_beam(&beam_demand(30.0, 30.0), &steel).unwrap();
        assert_eq!(beam.name, "W24x68");
        let column = catalog.size_column(&column_demand(5), &[&beam], &steel).unwrap();
        assert_eq!(column.name, "W14x132");
    }

    #[test]
    fn test_longer_span_needs_deeper_beam() {
        let catalog = SteelCatalog::default();
        let steel = Material::steel(1);
        let short = catalog.size_beam(&beam_demand(20.0, 30.0), &steel).unwrap();
        let long = catalog.size_beam(&beam_demand(40.0, 30.0), &steel).unwrap();
        assert!(long.ix > short.ix);
    }

    #[test]
    fn test_column_stiffness_monotone_in_stories() {
        let catalog = SteelCatalog::default();
        let steel = Material::steel(1);
        let beam = catalog.size_beam(&beam_demand(30.0, 30.0), &steel).unwrap();
        let mut previous = 0.0;
        for stories in 1..=60 {
            let column = catalog.size_column(&column_demand(stories), &[&beam], &steel).unwrap();
            assert!(column.ix >= previous, "stories {}", stories);
            previous = column.ix;
        }
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let catalog = SteelCatalog {
            beams: Vec::new(),
            ..SteelCatalog::default()
        };
        let result = catalog.size_beam(&beam_demand(30.0, 30.0), &Material::steel(1));
        assert!(matches!(
            result,
            Err(GenError::InvalidParameter { field: "sectionCatalog", .. })
        ));
    }

    #[test]
    fn test_excess_demand_uses_heaviest_shape() {
        let catalog = SteelCatalog::default();
        let steel = Material::steel(1);
        let beam = catalog.size_beam(&beam_demand(30.0, 30.0), &steel).unwrap();
        let column = catalog.size_column(&column_demand(500), &[&beam], &steel).unwrap();
        assert_eq!(column.name, "W14x730");
    }
}
