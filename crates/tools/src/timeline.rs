use strider_motion::MotionEvent;

/// Motion events stamped with the frame that produced them.
///
/// Fed from [`MotionController::drain_events`](strider_motion::MotionController::drain_events)
/// after each frame; keeps everything until cleared.
#[derive(Debug, Clone, Default)]
pub struct EventTimeline {
    entries: Vec<(u64, MotionEvent)>,
}

impl EventTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the events drained after frame `tick`.
    pub fn record(&mut self, tick: u64, events: impl IntoIterator<Item = MotionEvent>) {
        for event in events {
            tracing::trace!(tick, ?event, "timeline entry");
            self.entries.push((tick, event));
        }
    }

    pub fn entries(&self) -> &[(u64, MotionEvent)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the inclusive frame range `[from, to]`.
    pub fn between(&self, from: u64, to: u64) -> impl Iterator<Item = &(u64, MotionEvent)> {
        self.entries
            .iter()
            .filter(move |(tick, _)| (from..=to).contains(tick))
    }

    /// Number of entries matching `pred`.
    pub fn count(&self, pred: impl Fn(&MotionEvent) -> bool) -> usize {
        self.entries.iter().filter(|(_, e)| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Display for EventTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (tick, event) in &self.entries {
            let line = match event {
                MotionEvent::Jumped { force } => format!("jumped (force {force:.2})"),
                MotionEvent::JumpIgnored => "jump ignored (airborne)".to_string(),
                MotionEvent::SprintChanged { sprinting: true } => "sprint on".to_string(),
                MotionEvent::SprintChanged { sprinting: false } => "sprint off".to_string(),
                MotionEvent::LeftGround => "left ground".to_string(),
                MotionEvent::Landed { impact_speed } => {
                    format!("landed (impact {impact_speed:.2})")
                }
                MotionEvent::CeilingHit => "ceiling hit".to_string(),
                MotionEvent::StepOffsetRestored { height } => {
                    format!("step offset restored ({height:.2})")
                }
            };
            writeln!(f, "[{tick:>5}] {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> EventTimeline {
        let mut t = EventTimeline::new();
        t.record(1, [MotionEvent::Jumped { force: 8.0 }]);
        t.record(2, [MotionEvent::LeftGround, MotionEvent::JumpIgnored]);
        t.record(9, [MotionEvent::Landed { impact_speed: 4.5 }]);
        t
    }

    #[test]
    fn entries_keep_their_tick() {
        let t = timeline();
        assert_eq!(t.len(), 4);
        assert_eq!(t.entries()[1], (2, MotionEvent::LeftGround));
    }

    #[test]
    fn between_is_inclusive() {
        let t = timeline();
        assert_eq!(t.between(2, 9).count(), 3);
        assert_eq!(t.between(3, 8).count(), 0);
    }

    #[test]
    fn count_filters_by_kind() {
        let t = timeline();
        assert_eq!(t.count(|e| matches!(e, MotionEvent::JumpIgnored)), 1);
        assert_eq!(t.count(|e| matches!(e, MotionEvent::CeilingHit)), 0);
    }

    #[test]
    fn display_lists_one_line_per_event() {
        let s = timeline().to_string();
        assert_eq!(s.lines().count(), 4);
        assert!(s.contains("[    9] landed (impact 4.50)"));
    }

    #[test]
    fn clear_empties() {
        let mut t = timeline();
        t.clear();
        assert!(t.is_empty());
    }
}
