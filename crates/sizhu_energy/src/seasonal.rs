//! Seasonal weighting of an element against the month command.
//!
//! The month branch's element sets the season. Every other contribution is
//! damped or amplified by how its element stands to the season in the
//! generation/control cycle.

use sizhu_core::Element;

/// Weight of `element` in a season commanded by `month_element`.
pub fn seasonal_coefficient(element: Element, month_element: Element) -> f64 {
    if element == month_element {
        1.4
    } else if month_element.generates(element) {
        1.2
    } else if element.generates(month_element) {
        1.0
    } else if element.controls(month_element) {
        0.8
    } else if month_element.controls(element) {
        0.6
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::ALL_ELEMENTS;

    #[test]
    fn in_season_element_is_strongest() {
        for month in ALL_ELEMENTS {
            for element in ALL_ELEMENTS {
                let c = seasonal_coefficient(element, month);
                assert!(c <= 1.4, "{element:?} in {month:?} month: {c}");
                if element == month {
                    assert_eq!(c, 1.4);
                }
            }
        }
    }

    #[test]
    fn wood_season_ladder() {
        use Element::*;
        assert_eq!(seasonal_coefficient(Wood, Wood), 1.4);
        assert_eq!(seasonal_coefficient(Fire, Wood), 1.2);
        assert_eq!(seasonal_coefficient(Water, Wood), 1.0);
        assert_eq!(seasonal_coefficient(Metal, Wood), 0.8);
        assert_eq!(seasonal_coefficient(Earth, Wood), 0.6);
    }

    #[test]
    fn coefficients_cover_all_pairs() {
        for month in ALL_ELEMENTS {
            for element in ALL_ELEMENTS {
                let c = seasonal_coefficient(element, month);
                assert!([0.6, 0.8, 1.0, 1.2, 1.4].contains(&c), "{c}");
            }
        }
    }
}
