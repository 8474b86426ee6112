//! Per-row menu geometry: total width, entry widths, and the menu's
//! sub-rectangle within the row bounds.

use slidemenu_graphics::Rect;
use smallvec::SmallVec;

use crate::host::{LayoutDirection, RowHost, RowId};

/// Cached geometry of one row's trailing menu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuMetrics {
    /// Combined width of all menu entries.
    pub total_width: f32,
    /// Individual entry widths, in layout order.
    pub entry_widths: SmallVec<[f32; 4]>,
}

/// Numeric sign of the reveal direction: the row content moves this way
/// (along x) as the menu becomes visible.
pub fn open_sign(direction: LayoutDirection) -> f32 {
    match direction {
        LayoutDirection::Ltr => -1.0,
        LayoutDirection::Rtl => 1.0,
    }
}

/// Computes a row's menu metrics, or `None` for menu-less rows.
///
/// A row has a menu only if the host reports a trailing menu container whose
/// entries' first descendants have a positive combined measured width. Rows
/// failing this check never enter the opened set.
pub fn resolve_menu_metrics(host: &dyn RowHost, row: RowId) -> Option<MenuMetrics> {
    let entry_widths = host.menu_entry_widths(row)?;
    let total_width: f32 = entry_widths.iter().sum();
    if total_width > 0.0 {
        Some(MenuMetrics {
            total_width,
            entry_widths,
        })
    } else {
        None
    }
}

/// The trailing sub-rectangle of `bounds` occupied by the menu: at the
/// leading edge under right-to-left reading order, the trailing edge
/// otherwise.
pub fn menu_bounds(bounds: Rect, total_width: f32, direction: LayoutDirection) -> Rect {
    let x = match direction {
        LayoutDirection::Rtl => bounds.x,
        LayoutDirection::Ltr => bounds.right() - total_width,
    };
    Rect::new(x, bounds.y, total_width, bounds.height)
}

#[cfg(test)]
mod tests {
    use slidemenu_foundation::{menu_bounds, open_sign, resolve_menu_metrics, LayoutDirection};
    use slidemenu_graphics::Rect;
    use slidemenu_testing::TestHost;
    use smallvec::{smallvec, SmallVec};

    #[test]
    fn resolves_positive_entry_widths() {
        let mut host = TestHost::new();
        let row = host.add_row(Rect::new(0.0, 0.0, 360.0, 80.0), Some(vec![80.0, 120.0]));
        let metrics = resolve_menu_metrics(&host, row).expect("row has a menu");
        assert_eq!(metrics.total_width, 200.0);
        let expected: SmallVec<[f32; 4]> = smallvec![80.0, 120.0];
        assert_eq!(metrics.entry_widths, expected);
    }

    #[test]
    fn menu_less_rows_resolve_to_none() {
        let mut host = TestHost::new();
        let plain = host.add_row(Rect::new(0.0, 0.0, 360.0, 80.0), None);
        let zero = host.add_row(Rect::new(0.0, 80.0, 360.0, 80.0), Some(vec![0.0, 0.0]));
        assert!(resolve_menu_metrics(&host, plain).is_none());
        assert!(resolve_menu_metrics(&host, zero).is_none());
    }

    #[test]
    fn menu_bounds_trails_in_ltr() {
        let bounds = Rect::new(0.0, 160.0, 360.0, 80.0);
        let menu = menu_bounds(bounds, 200.0, LayoutDirection::Ltr);
        assert_eq!(menu, Rect::new(160.0, 160.0, 200.0, 80.0));
    }

    #[test]
    fn menu_bounds_leads_in_rtl() {
        let bounds = Rect::new(0.0, 160.0, 360.0, 80.0);
        let menu = menu_bounds(bounds, 150.0, LayoutDirection::Rtl);
        assert_eq!(menu, Rect::new(0.0, 160.0, 150.0, 80.0));
    }

    #[test]
    fn open_sign_follows_reading_direction() {
        assert_eq!(open_sign(LayoutDirection::Ltr), -1.0);
        assert_eq!(open_sign(LayoutDirection::Rtl), 1.0);
    }
}
