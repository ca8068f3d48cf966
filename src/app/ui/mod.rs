mod controls;
mod panels;
mod tooltip;

pub(super) use tooltip::FloatingTooltip;
