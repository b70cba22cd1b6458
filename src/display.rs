use crate::models::{Routine, ScheduleBlock};

/// "project_work" -> "Project Work"
pub fn title_case(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one block as console-style text
pub fn render_block(block: &ScheduleBlock) -> String {
    format!(
        "{} - {}: {}\nDuration: {} minutes\nDescription: {}\nRecommendation: {}",
        block.start_time.format("%H:%M"),
        block.end_time.format("%H:%M"),
        title_case(block.activity.as_str()),
        block.duration_minutes,
        block.description,
        block.recommendation,
    )
}

pub fn render_routine(routine: &Routine) -> Vec<String> {
    routine.blocks.iter().map(render_block).collect()
}
