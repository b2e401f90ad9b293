//! Transition-edge builder: turns the ordered events of a day into the
//! connected path drawn on the log grid.

use crate::core::grid::{MINUTES_PER_DAY, Point, clamp_minutes, status_y, x_fraction};
use crate::models::duty_status::DutyStatus;
use crate::models::log_event::LogEvent;
use serde::Serialize;

/// Below this, two instants are the same (fractional minutes from seconds).
const TIME_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Status change: jump between two row bands at one instant.
    Vertical,
    /// Time spent in one status.
    Horizontal,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Vertical => "vertical",
            EdgeKind::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Edge {
    pub kind: EdgeKind,
    pub from: Point,
    pub to: Point,
    /// Status the path is in after this edge.
    pub status: DutyStatus,
    pub event_index: usize,
}

impl Edge {
    pub fn is_vertical(&self) -> bool {
        self.kind == EdgeKind::Vertical
    }

    pub fn is_horizontal(&self) -> bool {
        self.kind == EdgeKind::Horizontal
    }

    /// Horizontal extent in fractional units.
    pub fn x_span(&self) -> f64 {
        self.to.x - self.from.x
    }
}

/// Per-event findings collected while folding. None of them stops the fold.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    MalformedEvent {
        index: usize,
        status: String,
    },
    OutOfRangeTime {
        index: usize,
        start_minutes: f64,
        end_minutes: f64,
    },
    Gap {
        index: usize,
        from_minutes: f64,
        to_minutes: f64,
    },
    Overlap {
        index: usize,
        start_minutes: f64,
        previous_end_minutes: f64,
    },
}

/// Fold state threaded through the events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCursor {
    pub last_status: DutyStatus,
    pub last_end_minutes: f64,
}

impl Default for PathCursor {
    /// A blank log starts at midnight on the Off Duty row.
    fn default() -> Self {
        Self {
            last_status: DutyStatus::OffDuty,
            last_end_minutes: 0.0,
        }
    }
}

/// Clamped interval of one event, plus whether clamping changed anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedSpan {
    pub start: f64,
    pub end: f64,
    pub adjusted: bool,
}

impl ClampedSpan {
    pub fn of(event: &LogEvent) -> Self {
        let raw_start = event.start_minutes;
        let raw_end = event.end_minutes();

        let start = clamp_minutes(raw_start);
        let end = clamp_minutes(raw_end).max(start);

        let in_range = (0.0..MINUTES_PER_DAY).contains(&raw_start)
            && raw_end <= MINUTES_PER_DAY
            && raw_end >= raw_start;

        Self {
            start,
            end,
            adjusted: !in_range,
        }
    }

    pub fn minutes(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EdgePath {
    pub edges: Vec<Edge>,
    pub final_status: DutyStatus,
    pub anomalies: Vec<Anomaly>,
}

impl EdgePath {
    pub fn vertical_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_vertical())
    }

    pub fn horizontal_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_horizontal())
    }
}

#[derive(Debug, Default)]
struct Acc {
    cursor: PathCursor,
    edges: Vec<Edge>,
    anomalies: Vec<Anomaly>,
}

impl PathCursor {
    /// Advance over one event, returning the next cursor.
    /// Edges and anomalies are appended to the given buffers.
    fn step(
        self,
        index: usize,
        event: &LogEvent,
        edges: &mut Vec<Edge>,
        anomalies: &mut Vec<Anomaly>,
    ) -> Self {
        let Some(status) = event.duty_status() else {
            anomalies.push(Anomaly::MalformedEvent {
                index,
                status: event.status.clone(),
            });
            return self;
        };

        let span = ClampedSpan::of(event);
        if span.adjusted {
            anomalies.push(Anomaly::OutOfRangeTime {
                index,
                start_minutes: event.start_minutes,
                end_minutes: event.end_minutes(),
            });
        }

        if span.start - self.last_end_minutes > TIME_EPSILON {
            anomalies.push(Anomaly::Gap {
                index,
                from_minutes: self.last_end_minutes,
                to_minutes: span.start,
            });
        } else if self.last_end_minutes - span.start > TIME_EPSILON {
            anomalies.push(Anomaly::Overlap {
                index,
                start_minutes: span.start,
                previous_end_minutes: self.last_end_minutes,
            });
        }

        let start_x = x_fraction(span.start);
        let end_x = x_fraction(span.end);
        let y = status_y(status);

        if status != self.last_status {
            edges.push(Edge {
                kind: EdgeKind::Vertical,
                from: Point::new(start_x, status_y(self.last_status)),
                to: Point::new(start_x, y),
                status,
                event_index: index,
            });
        }

        edges.push(Edge {
            kind: EdgeKind::Horizontal,
            from: Point::new(start_x, y),
            to: Point::new(end_x, y),
            status,
            event_index: index,
        });

        PathCursor {
            last_status: status,
            last_end_minutes: span.end,
        }
    }
}

/// Build the path for a day, starting from the blank-log cursor.
pub fn build_edges(events: &[LogEvent]) -> EdgePath {
    build_edges_from(PathCursor::default(), events)
}

/// Build the path starting from an explicit cursor.
pub fn build_edges_from(start: PathCursor, events: &[LogEvent]) -> EdgePath {
    let acc = events.iter().enumerate().fold(
        Acc {
            cursor: start,
            ..Acc::default()
        },
        |mut acc, (i, ev)| {
            acc.cursor = acc.cursor.step(i, ev, &mut acc.edges, &mut acc.anomalies);
            acc
        },
    );

    EdgePath {
        edges: acc.edges,
        final_status: acc.cursor.last_status,
        anomalies: acc.anomalies,
    }
}
