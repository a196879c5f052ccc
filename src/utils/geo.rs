// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 地球平均半径（公里）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 两个经纬度坐标间的大圆距离（公里）
///
/// 半正矢公式，短距离下数值稳定
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let half_dphi = (lat2 - lat1).to_radians() / 2.0;
    let half_dlambda = (lon2 - lon1).to_radians() / 2.0;
    let a = half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlambda.sin().powi(2);
    // rounding can push `a` slightly above 1 near antipodes
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let d = haversine_km(45.5231, -122.6765, 45.5231, -122.6765);
        assert!(d.abs() < 1e-6, "distance was {}", d);
    }

    #[test]
    fn test_known_distance() {
        // Portland, OR to Seattle, WA is roughly 233 km
        let d = haversine_km(45.5152, -122.6784, 47.6062, -122.3321);
        assert!((d - 233.0).abs() < 5.0, "distance was {}", d);
    }

    #[test]
    fn test_short_distance_is_precise() {
        // 0.001 degrees of latitude is about 111.2 metres
        let d = haversine_km(45.0, -122.0, 45.001, -122.0);
        let expected = EARTH_RADIUS_KM * 0.001_f64.to_radians();
        assert!((d - expected).abs() < 1e-9, "distance was {}", d);
    }

    #[test]
    fn test_antipodes() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
