use slidemenu_graphics::Point;

/// Phase of a raw pointer event as delivered by the host.
///
/// `SecondaryDown`/`SecondaryUp` are transitions of additional fingers while
/// the first pointer stays down; the router swallows them whenever row slide
/// state exists, since only a single active row per gesture stream is
/// supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    SecondaryDown,
    SecondaryUp,
}

/// One raw pointer event, in the list's coordinate space.
///
/// Consumption is reported back to the host through the router's boolean
/// returns rather than carried on the event itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Host-provided event timestamp, used for velocity estimation and to
    /// drive animations on the same clock.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), time_ms)
    }

    pub fn cancel(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), time_ms)
    }
}
