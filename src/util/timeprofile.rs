use std::{borrow::Cow, collections::{hash_map::Entry, HashMap}, fmt::Display, time::{Duration, Instant}};

/// Named timestamps recorded while a detection runs
#[derive(Clone, Debug)]
pub struct TimeProfile {
    /// Start timestamp
    now: Instant,
    /// Named timestamps
    stamps: Vec<TimeProfileEntry>,
}

impl Default for TimeProfile {
    fn default() -> Self {
        Self {
            now: Instant::now(),
            stamps: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
struct TimeProfileEntry {
    name: Cow<'static, str>,
    timestamp: Instant,
}

impl TimeProfile {
    /// Get start time
    pub fn start(&self) -> Instant {
        self.now
    }

    /// Clear all records and restart the clock
    pub fn clear(&mut self) {
        self.stamps.clear();
        self.now = Instant::now();
    }

    /// Record a timestamp right now
    #[inline]
    pub fn stamp(&mut self, name: impl Into<Cow<'static, str>>) {
        self.stamps.push(TimeProfileEntry {
            name: name.into(),
            timestamp: Instant::now(),
        });
    }

    /// Name and duration of each stage, measured from the previous stamp
    pub fn stages(&self) -> impl Iterator<Item = (&str, Duration)> + '_ {
        let mut last = self.now;
        self.stamps.iter().map(move |stamp| {
            let part = stamp.timestamp.saturating_duration_since(last);
            last = stamp.timestamp;
            (stamp.name.as_ref(), part)
        })
    }

    /// Duration from [start](Self::start) to the last recorded timestamp
    pub fn total_duration(&self) -> Duration {
        match self.stamps.last() {
            Some(last) => last.timestamp.saturating_duration_since(self.now),
            None => Duration::ZERO,
        }
    }
}

impl Display for TimeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max_name_length = self.stamps.iter()
            .map(|stamp| stamp.name.len())
            .max()
            .unwrap_or(0)
            .max(1);

        let total_time = self.total_duration().as_secs_f64();

        let mut cumtime = Duration::ZERO;
        for (i, (name, parttime)) in self.stages().enumerate() {
            cumtime += parttime;
            let percent = if total_time > 0. { 100. * parttime.as_secs_f64() / total_time } else { 0. };
            writeln!(f, "{:2} {:width$} {:12.6} ms {:12.6} ms {:3.0}%",
                i,
                name,
                parttime.as_secs_f64() * 1000.,
                cumtime.as_secs_f64() * 1000.,
                percent,
                width = max_name_length
            )?;
        }
        Ok(())
    }
}

/// Aggregates the stages of many [TimeProfile]s
#[derive(Default, Debug)]
pub struct TimeProfileStatistics {
    values: HashMap<String, Vec<Duration>>,
    /// Stage names, in first-seen order
    keys: Vec<String>,
}

impl TimeProfileStatistics {
    pub fn add(&mut self, tp: &TimeProfile) {
        for (name, duration) in tp.stages() {
            match self.values.entry(name.to_owned()) {
                Entry::Occupied(mut e) => e.get_mut().push(duration),
                Entry::Vacant(e) => {
                    e.insert(vec![duration]);
                    self.keys.push(name.to_owned());
                },
            }
        }
    }

    /// Number of samples recorded for a stage
    pub fn count(&self, name: &str) -> usize {
        self.values.get(name).map_or(0, Vec::len)
    }
}

impl Display for TimeProfileStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max_name = self.keys
            .iter()
            .map(|key| key.len())
            .max()
            .unwrap_or(0);

        writeln!(f, " # {:width$} {:>15} {:>15} {:>15} {:>15}", "Name", "Average", "Min", "Max", "Std.dev", width = max_name)?;

        for (i, key) in self.keys.iter().enumerate() {
            let Some(entry) = self.values.get(key) else { continue };
            let mut max = Duration::ZERO;
            let mut min = Duration::MAX;
            let mut sum = 0.;
            let mut sum_sq = 0.;
            for d in entry.iter().copied() {
                let d_s = d.as_secs_f64();
                sum += d_s;
                sum_sq += d_s * d_s;
                max = max.max(d);
                min = min.min(d);
            }
            let len = entry.len().max(1) as f64;
            let avg = sum / len;
            let stddev = (sum_sq / len - avg * avg).max(0.).sqrt();

            writeln!(f, "{:2} {:width$} {:12.6} ms {:12.6} ms {:12.6} ms {:12.6} ms",
                i, key, avg * 1e3, min.as_secs_f64() * 1e3, max.as_secs_f64() * 1e3, stddev * 1e3, width = max_name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{TimeProfile, TimeProfileStatistics};

    #[test]
    fn stages_are_ordered() {
        let mut tp = TimeProfile::default();
        tp.stamp("a");
        tp.stamp(String::from("b"));
        let names = tp.stages().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, ["a", "b"]);
        let sum = tp.stages().map(|(_, d)| d).sum::<std::time::Duration>();
        assert_eq!(sum, tp.total_duration());

        let table = tp.to_string();
        assert_eq!(table.lines().count(), 2);

        tp.clear();
        assert_eq!(tp.stages().count(), 0);
    }

    #[test]
    fn statistics_accumulate() {
        let mut stats = TimeProfileStatistics::default();
        for _ in 0..3 {
            let mut tp = TimeProfile::default();
            tp.stamp("threshold");
            tp.stamp("decode");
            stats.add(&tp);
        }
        assert_eq!(stats.count("threshold"), 3);
        assert_eq!(stats.count("missing"), 0);
        // header plus one row per stage
        assert_eq!(stats.to_string().lines().count(), 3);
    }
}
