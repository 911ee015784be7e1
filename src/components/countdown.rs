//! Launch countdown. Purely decorative: the state starts from a hardcoded
//! value on every page load and decrements once per second in memory, with
//! no wall-clock deadline behind it.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

/// Remaining time as a (days, hours, minutes, seconds) tuple. Once every
/// field reaches zero the value stays there; there is no wraparound and no
/// completion signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeLeft {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeft {
    pub const fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        assert!(hours < 24 && minutes < 60 && seconds < 60);
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub const fn start() -> Self {
        let (d, h, m, s) = config::COUNTDOWN_START;
        Self::new(d, h, m, s)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::new(0, 0, 0, 0)
    }

    /// Advance one second. Borrows cascade seconds -> minutes -> hours ->
    /// days; at all-zero the state is returned unchanged.
    pub fn tick(mut self) -> Self {
        if self.is_zero() {
            return self;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
        } else {
            self.seconds = 59;
            if self.minutes > 0 {
                self.minutes -= 1;
            } else {
                self.minutes = 59;
                if self.hours > 0 {
                    self.hours -= 1;
                } else {
                    self.hours = 23;
                    if self.days > 0 {
                        self.days -= 1;
                    }
                }
            }
        }
        self
    }

    /// The state after `n` ticks, clamped at all-zero.
    pub fn after_ticks(self, n: u64) -> Self {
        Self::from_total_seconds(self.total_seconds().saturating_sub(n))
    }

    fn total_seconds(&self) -> u64 {
        u64::from(self.days) * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    fn from_total_seconds(total: u64) -> Self {
        Self {
            days: (total / 86_400) as u32,
            hours: ((total % 86_400) / 3_600) as u32,
            minutes: ((total % 3_600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }
}

fn time_box(value: u32, label: &str) -> Html {
    html! {
        <div class="time-box">
            <div class="time-box-value sketchy-box">
                <span>{ format!("{:02}", value) }</span>
            </div>
            <span class="time-box-label">{ label }</span>
        </div>
    }
}

/// Four-box countdown display, ticking once per second while mounted. The
/// interval handle lives inside the effect and is dropped on unmount, so no
/// timer outlives the component.
#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let time_left = use_state(TimeLeft::start);

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                // The closure keeps the authoritative value between ticks;
                // the state handle only pushes it out for display.
                let mut current = *time_left;
                let interval = Interval::new(1_000, move || {
                    current = current.tick();
                    time_left.set(current);
                });

                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="countdown">
            { time_box(time_left.days, "Days") }
            { time_box(time_left.hours, "Hours") }
            { time_box(time_left.minutes, "Minutes") }
            { time_box(time_left.seconds, "Seconds") }
            <style>
                {r#"
                .countdown {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }
                .time-box {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .time-box-value {
                    width: 6.5rem;
                    height: 7.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 0.5rem;
                    transition: transform 0.2s ease;
                }
                .time-box-value:hover {
                    transform: scale(1.1) rotate(-3deg);
                }
                .time-box-value span {
                    font-family: 'Permanent Marker', cursive;
                    font-size: 2.75rem;
                    color: #78350f;
                }
                .time-box-label {
                    font-weight: 700;
                    color: #78350f;
                    text-transform: uppercase;
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .countdown {
                        gap: 1rem;
                    }
                    .time-box-value {
                        width: 5rem;
                        height: 6rem;
                    }
                    .time-box-value span {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_decrement_within_a_minute() {
        let state = TimeLeft::new(0, 0, 0, 5);
        assert_eq!(state.tick(), TimeLeft::new(0, 0, 0, 4));
    }

    #[test]
    fn last_second_reaches_zero_then_stalls() {
        let state = TimeLeft::new(0, 0, 0, 1);
        let at_zero = state.tick();
        assert_eq!(at_zero, TimeLeft::new(0, 0, 0, 0));
        // No wraparound past zero.
        assert_eq!(at_zero.tick(), TimeLeft::new(0, 0, 0, 0));
        assert!(at_zero.is_zero());
    }

    #[test]
    fn minute_borrow() {
        let state = TimeLeft::new(0, 0, 1, 0);
        assert_eq!(state.tick(), TimeLeft::new(0, 0, 0, 59));
    }

    #[test]
    fn hour_borrow() {
        let state = TimeLeft::new(0, 1, 0, 0);
        assert_eq!(state.tick(), TimeLeft::new(0, 0, 59, 59));
    }

    #[test]
    fn day_borrow() {
        let state = TimeLeft::new(1, 0, 0, 0);
        assert_eq!(state.tick(), TimeLeft::new(0, 23, 59, 59));
    }

    #[test]
    fn after_ticks_matches_repeated_tick() {
        let start = TimeLeft::new(0, 1, 2, 3);
        let mut stepped = start;
        for n in 0..=4_000u64 {
            assert_eq!(start.after_ticks(n), stepped, "diverged at n={n}");
            stepped = stepped.tick();
        }
    }

    #[test]
    fn after_ticks_clamps_at_zero() {
        let start = TimeLeft::new(0, 0, 1, 30);
        assert_eq!(start.after_ticks(1_000_000), TimeLeft::new(0, 0, 0, 0));
    }

    #[test]
    fn after_ticks_crosses_field_boundaries() {
        let start = TimeLeft::new(2, 0, 0, 0);
        assert_eq!(start.after_ticks(1), TimeLeft::new(1, 23, 59, 59));
        assert_eq!(start.after_ticks(86_400), TimeLeft::new(1, 0, 0, 0));
        assert_eq!(start.after_ticks(2 * 86_400), TimeLeft::new(0, 0, 0, 0));
    }

    #[test]
    fn start_value_comes_from_config() {
        let (d, h, m, s) = config::COUNTDOWN_START;
        assert_eq!(TimeLeft::start(), TimeLeft::new(d, h, m, s));
    }
}
