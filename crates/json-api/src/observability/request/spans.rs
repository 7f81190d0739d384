//! HTTP span helpers.

use uuid::Uuid;

/// Collapse identifier segments so requests to the same route share a label.
pub(super) fn route_for_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut route = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            route.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            route.push_str("{uuid}");
        } else {
            route.push_str(segment);
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        assert_eq!(
            route_for_path("/products/0192e3a4-5b6c-7d8e-9f00-112233445566/price-stats"),
            "/products/{uuid}/price-stats"
        );
    }

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(route_for_path("/"), "/");
        assert_eq!(route_for_path("/prices/mine"), "/prices/mine");
    }
}
