use serde::{Deserialize, Serialize};

use crate::model::summary::Summary;

// Unit conversions
const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

// Distance covered per action, meters (stride vs stroke)
const LEN_STEP: f64 = 0.65;
const LEN_STROKE: f64 = 1.38;

// Calorie coefficients
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;
const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// One recorded workout session. Common fields: `action` is the raw
/// step/stroke count, `duration` is hours, `weight` kilograms.
/// Immutable once constructed; everything else is derived.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Workout {
    Running {
        action: u32,
        duration: f64,
        weight: f64,
    },
    SportsWalking {
        action: u32,
        duration: f64,
        weight: f64,
        /// Athlete height, centimeters.
        height: f64,
    },
    Swimming {
        action: u32,
        duration: f64,
        weight: f64,
        /// Pool length, meters.
        length_pool: f64,
        count_pool: u32,
    },
}

impl Workout {
    pub fn name(&self) -> &'static str {
        match self {
            Workout::Running { .. } => "Running",
            Workout::SportsWalking { .. } => "SportsWalking",
            Workout::Swimming { .. } => "Swimming",
        }
    }

    pub fn duration(&self) -> f64 {
        match *self {
            Workout::Running { duration, .. }
            | Workout::SportsWalking { duration, .. }
            | Workout::Swimming { duration, .. } => duration,
        }
    }

    fn action(&self) -> u32 {
        match *self {
            Workout::Running { action, .. }
            | Workout::SportsWalking { action, .. }
            | Workout::Swimming { action, .. } => action,
        }
    }

    fn weight(&self) -> f64 {
        match *self {
            Workout::Running { weight, .. }
            | Workout::SportsWalking { weight, .. }
            | Workout::Swimming { weight, .. } => weight,
        }
    }

    /// Distance in km.
    pub fn distance(&self) -> f64 {
        let step = match self {
            Workout::Swimming { .. } => LEN_STROKE,
            _ => LEN_STEP,
        };
        f64::from(self.action()) * step / M_IN_KM
    }

    /// Mean speed in km/h. Swimming derives it from pool laps rather
    /// than the stroke-count distance.
    pub fn mean_speed(&self) -> f64 {
        match *self {
            Workout::Swimming {
                duration,
                length_pool,
                count_pool,
                ..
            } => length_pool * f64::from(count_pool) / M_IN_KM / duration,
            _ => self.distance() / self.duration(),
        }
    }

    /// Calories burned over the whole session.
    pub fn spent_calories(&self) -> f64 {
        match *self {
            Workout::Running {
                duration, weight, ..
            } => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed() + RUN_SPEED_SHIFT) * weight / M_IN_KM
                    * duration
                    * MIN_IN_H
            }
            Workout::SportsWalking {
                duration,
                weight,
                height,
                ..
            } => {
                let speed_msec = self.mean_speed() * KMH_IN_MSEC;
                (WALK_WEIGHT_MULTIPLIER * weight
                    + speed_msec.powi(2) / (height / CM_IN_M)
                        * WALK_SPEED_HEIGHT_MULTIPLIER
                        * weight)
                    * duration
                    * MIN_IN_H
            }
            Workout::Swimming {
                duration, weight, ..
            } => {
                (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight * duration
            }
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            workout_type: self.name().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_stats() {
        let workout = Workout::Running {
            action: 15000,
            duration: 1.0,
            weight: 75.0,
        };
        assert_close(workout.distance(), 9.75);
        assert_close(workout.mean_speed(), 9.75);
        // (18 * 9.75 + 1.79) * 75 / 1000 * 1 * 60
        assert_close(workout.spent_calories(), 797.805);
    }

    #[test]
    fn test_walking_stats() {
        let workout = Workout::SportsWalking {
            action: 9000,
            duration: 1.0,
            weight: 75.0,
            height: 180.0,
        };
        assert_close(workout.distance(), 5.85);
        assert_close(workout.mean_speed(), 5.85);
        // (0.035*75 + (5.85*0.278)^2 / 1.8 * 0.029 * 75) * 60
        assert_close(workout.spent_calories(), 349.251747525);
    }

    #[test]
    fn test_swimming_uses_stroke_length_for_distance() {
        let workout = Workout::Swimming {
            action: 720,
            duration: 1.0,
            weight: 80.0,
            length_pool: 25.0,
            count_pool: 40,
        };
        assert_close(workout.distance(), 0.9936);
    }

    #[test]
    fn test_swimming_speed_from_pool_laps() {
        let workout = Workout::Swimming {
            action: 720,
            duration: 1.0,
            weight: 80.0,
            length_pool: 25.0,
            count_pool: 40,
        };
        // 25 * 40 / 1000 / 1
        assert_close(workout.mean_speed(), 1.0);
        // (1.0 + 1.1) * 2 * 80 * 1
        assert_close(workout.spent_calories(), 336.0);
    }

    #[test]
    fn test_summary_carries_derived_fields() {
        let workout = Workout::Running {
            action: 15000,
            duration: 1.0,
            weight: 75.0,
        };
        let summary = workout.summary();
        assert_eq!(summary.workout_type, "Running");
        assert_close(summary.duration, 1.0);
        assert_close(summary.distance, 9.75);
        assert_close(summary.speed, 9.75);
        assert_close(summary.calories, 797.805);
    }
}
