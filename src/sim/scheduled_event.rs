//! 调度事件
//!
//! 定义调度事件结构及其排序：先按时间，再按优先级（小者先），
//! 最后按插入序号，保证同刻事件的处理顺序确定。

use super::event::Event;
use super::time::SimTime;
use std::cmp::Ordering;

/// 调度事件，包含执行时间、优先级、序列号和事件对象。
pub struct ScheduledEvent {
    pub(crate) at: SimTime,
    pub(crate) prio: u8,
    pub(crate) seq: u64,
    pub(crate) ev: Box<dyn Event>,
}

// BinaryHeap 是 max-heap；我们需要最小键优先，因此反向比较。
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.at, self.prio, self.seq)
            .cmp(&(other.at, other.prio, other.seq))
            .reverse()
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.prio == other.prio && self.seq == other.seq
    }
}

impl Eq for ScheduledEvent {}
