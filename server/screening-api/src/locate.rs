//! "Find a cardiologist" map deep links.

use crate::types::{Coordinates, SearchLinkResponse};

/// Map zoom used for geolocated searches.
const ZOOM: u8 = 13;

fn usable(c: &Coordinates) -> bool {
  c.latitude.is_finite()
    && c.longitude.is_finite()
    && (-90.0..=90.0).contains(&c.latitude)
    && (-180.0..=180.0).contains(&c.longitude)
}

/// Search link centred on `coords`, or the generic "near me" search when
/// coordinates are missing or unusable. Never fails.
pub fn cardiologist_search_link(base: &str, coords: Option<Coordinates>) -> SearchLinkResponse {
  let base = base.trim_end_matches('/');
  match coords.filter(usable) {
    Some(c) => SearchLinkResponse {
      url: format!(
        "{}/cardiologist/@{},{},{}z",
        base, c.latitude, c.longitude, ZOOM
      ),
      geolocated: true,
    },
    None => SearchLinkResponse {
      url: format!("{}/cardiologist+near+me", base),
      geolocated: false,
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::DEFAULT_MAPS_SEARCH_BASE;

  #[test]
  fn coordinates_produce_geolocated_link() {
    let link = cardiologist_search_link(
      DEFAULT_MAPS_SEARCH_BASE,
      Some(Coordinates {
        latitude: 51.5072,
        longitude: -0.1276,
      }),
    );
    assert!(link.geolocated);
    assert_eq!(
      link.url,
      "https://www.google.com/maps/search/cardiologist/@51.5072,-0.1276,13z"
    );
  }

  #[test]
  fn missing_coordinates_fall_back() {
    let link = cardiologist_search_link(DEFAULT_MAPS_SEARCH_BASE, None);
    assert!(!link.geolocated);
    assert_eq!(
      link.url,
      "https://www.google.com/maps/search/cardiologist+near+me"
    );
  }

  #[test]
  fn out_of_range_coordinates_fall_back() {
    for (lat, lon) in [(91.0, 0.0), (0.0, -181.0), (f64::NAN, 10.0)] {
      let link = cardiologist_search_link(
        DEFAULT_MAPS_SEARCH_BASE,
        Some(Coordinates {
          latitude: lat,
          longitude: lon,
        }),
      );
      assert!(!link.geolocated, "{lat},{lon}");
    }
  }

  #[test]
  fn trailing_slash_on_base_is_ignored() {
    let link = cardiologist_search_link("https://maps.example/search/", None);
    assert_eq!(link.url, "https://maps.example/search/cardiologist+near+me");
  }
}
