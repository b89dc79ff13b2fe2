//! Text formatting for the terminal views
//!
//! This module turns timer and task-list state into plain text.

use crate::pomodoro::{PomodoroTimer, SessionKind, SessionRecord, SessionSummary};
use crate::todo::{TaskFilter, TaskList, TaskRecord, TaskStats};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a countdown as `MM:SS`
///
/// # Arguments
/// * `seconds` - Remaining seconds; minutes are not wrapped into hours
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Label of the loaded session: "Work Session", "Long Break" or "Short Break"
pub fn session_label(timer: &PomodoroTimer) -> &'static str {
    match timer.mode() {
        SessionKind::Work => "Work Session",
        SessionKind::Break if timer.is_long_break() => "Long Break",
        SessionKind::Break => "Short Break",
    }
}

/// One-line timer status, e.g. `Work Session  24:59  [running]  sessions: 2`
pub fn format_timer_status(timer: &PomodoroTimer) -> String {
    let state = if timer.is_running() {
        "running"
    } else {
        "paused"
    };
    format!(
        "{}  {}  [{}]  sessions: {}",
        session_label(timer),
        format_clock(timer.remaining_seconds()),
        state,
        timer.session_count()
    )
}

/// Current durations in minutes
pub fn format_settings(timer: &PomodoroTimer) -> String {
    let settings = timer.settings();
    format!(
        "Work: {} min, Short break: {} min, Long break: {} min",
        settings.work / 60,
        settings.short_break / 60,
        settings.long_break / 60
    )
}

fn format_session(record: &SessionRecord) -> String {
    format!(
        "{} Session | Duration: {} minutes | Completed: {}",
        record.kind,
        record.duration / 60,
        record.completed_at.format(TIMESTAMP_FORMAT)
    )
}

/// Statistics block followed by the most recent sessions
pub fn format_summary(summary: &SessionSummary) -> String {
    if summary.is_empty() {
        return "No completed sessions yet. Start your first Pomodoro session!".to_string();
    }

    let mut lines = vec![
        "Today's Statistics".to_string(),
        format!("Total Work Sessions: {}", summary.work_sessions),
        format!(
            "Total Time Worked: {} hours {} minutes",
            summary.worked_hours(),
            summary.worked_minutes()
        ),
        String::new(),
        "Recent Sessions".to_string(),
    ];
    lines.extend(summary.recent.iter().map(format_session));
    lines.join("\n")
}

fn format_task(task: &TaskRecord, editing: bool) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let marker = if editing { " (editing)" } else { "" };
    format!("{} {} {}{}", check, task.id, task.text, marker)
}

pub fn format_stats(stats: &TaskStats) -> String {
    format!(
        "Total: {}  Active: {}  Completed: {}",
        stats.total, stats.active, stats.completed
    )
}

/// Render the list as an Active section and a Completed section
///
/// Sections excluded by the current filter are omitted; an empty section
/// shows a placeholder line.
pub fn format_task_list(list: &TaskList) -> String {
    let editing = list.editing();
    let visible = list.visible();
    let mut out = Vec::new();

    let sections = [
        (TaskFilter::Active, "Active", "No active tasks!"),
        (TaskFilter::Completed, "Completed", "No completed tasks yet!"),
    ];
    for (section, title, empty) in sections {
        if list.filter() != TaskFilter::All && list.filter() != section {
            continue;
        }

        out.push(format!("{title}:"));
        let tasks: Vec<&TaskRecord> = visible
            .iter()
            .copied()
            .filter(|t| section.matches(t))
            .collect();
        if tasks.is_empty() {
            out.push(format!("  {empty}"));
        }
        for task in tasks {
            out.push(format!("  {}", format_task(task, editing == Some(task.id))));
        }
    }

    out.push(format_stats(&list.stats()));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::TimerSettings;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_session_labels() {
        let settings = TimerSettings {
            work: 1,
            short_break: 1,
            long_break: 1,
        };
        let mut timer = PomodoroTimer::new(settings);
        assert_eq!(session_label(&timer), "Work Session");

        let now = Local::now();
        timer.start();
        timer.tick(now);
        assert_eq!(session_label(&timer), "Short Break");

        for _ in 0..6 {
            timer.start();
            timer.tick(now);
        }
        assert_eq!(timer.session_count(), 4);
        assert_eq!(session_label(&timer), "Long Break");
    }

    #[test]
    fn test_empty_summary() {
        let summary = PomodoroTimer::default().summary();
        assert_eq!(
            format_summary(&summary),
            "No completed sessions yet. Start your first Pomodoro session!"
        );
    }

    #[test]
    fn test_task_list_sections_follow_filter() {
        let mut list = TaskList::new();
        let at = Local.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let a = list.add("A", at).unwrap();
        list.add("B", at).unwrap();
        list.toggle(a);

        let all = format_task_list(&list);
        assert!(all.lines().any(|l| l == "Active:"));
        assert!(all.lines().any(|l| l == "Completed:"));
        assert!(all.contains("[x]"));
        assert!(all.ends_with("Total: 2  Active: 1  Completed: 1"));

        list.set_filter(TaskFilter::Active);
        let active = format_task_list(&list);
        assert!(!active.lines().any(|l| l == "Completed:"));
        assert!(!active.contains("[x]"));
    }

    #[test]
    fn test_task_list_placeholders_and_edit_marker() {
        let mut list = TaskList::new();
        let rendered = format_task_list(&list);
        assert!(rendered.contains("No active tasks!"));
        assert!(rendered.contains("No completed tasks yet!"));

        let id = list.add("A", Local::now()).unwrap();
        list.start_edit(id);
        assert!(format_task_list(&list).contains("A (editing)"));
    }
}
