#![allow(dead_code)]

use lifeviz::{Event, Session, VizConfig};

/// Five rows over two countries; Niger 2001 has no life expectancy.
pub const CSV: &str = "\
Country,Year,Status,Life expectancy ,Adult Mortality,infant deaths
Chad,2000,Developing,46.0,393,82
Chad,2001,Developing,46.6,381,81
Chad,2002,Developing,47.1,375,80
Niger,2000,Developing,50.2,300,60
Niger,2001,Developing,,290,58
";

/// Chad and Niger share arc 0; Atlantis is an island with no data rows.
pub const TOPOLOGY: &str = r#"{
  "type": "Topology",
  "arcs": [
    [[1, 0], [1, 1]],
    [[1, 1], [0, 1], [0, 0], [1, 0]],
    [[1, 0], [2, 0], [2, 1], [1, 1]],
    [[5, 5], [6, 5], [6, 6], [5, 5]]
  ],
  "objects": {
    "countries": {
      "type": "GeometryCollection",
      "geometries": [
        {"type": "Polygon", "id": "148", "properties": {"name": "Chad"}, "arcs": [[0, 1]]},
        {"type": "Polygon", "id": "562", "properties": {"name": "Niger"}, "arcs": [[2, -1]]},
        {"type": "Polygon", "properties": {"name": "Atlantis"}, "arcs": [[3]]}
      ]
    }
  }
}"#;

pub fn loaded() -> Session {
    let mut s = Session::new(VizConfig::default());
    s.load(CSV, TOPOLOGY).unwrap();
    s
}

pub fn select(s: &mut Session, country: &str, year: &str) {
    s.dispatch(Event::SelectCountry(country.to_string())).unwrap();
    s.dispatch(Event::SelectYear(year.to_string())).unwrap();
}
