//! 仿真时间类型
//!
//! 定义仿真时间及其单位转换。模型单位为小时；内部用整数纳秒，
//! 保证日历排序是全序且可复现。

const NANOS_PER_HOUR: u64 = 3_600_000_000_000;

/// 仿真时间（纳秒）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    pub fn from_secs(s: u64) -> SimTime {
        SimTime(s.saturating_mul(1_000_000_000))
    }

    pub fn from_hours(h: u64) -> SimTime {
        SimTime(h.saturating_mul(NANOS_PER_HOUR))
    }

    /// 小时（浮点）转仿真时间，负值按 0 处理，溢出饱和。
    pub fn from_hours_f64(h: f64) -> SimTime {
        if !h.is_finite() || h <= 0.0 {
            return SimTime::ZERO;
        }
        let ns = h * NANOS_PER_HOUR as f64;
        if ns >= u64::MAX as f64 {
            SimTime(u64::MAX)
        } else {
            SimTime(ns.round() as u64)
        }
    }

    pub fn as_hours_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_HOUR as f64
    }

    /// 当前时间加上一段小时数（采样得到的间隔）。
    pub fn add_hours_f64(self, h: f64) -> SimTime {
        SimTime(self.0.saturating_add(SimTime::from_hours_f64(h).0))
    }
}
