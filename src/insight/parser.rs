use serde::Serialize;
use std::collections::BTreeSet;

pub const RECIPE_PREFIX: &str = "RECIPE:";
pub const TASK_PREFIX: &str = "TASK:";

/// One rendered line of an insight, in the order it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Paragraph(String),
    Task(String),
    Separator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedInsight {
    pub recipe: Option<String>,
    pub tasks: Vec<String>,
    pub blocks: Vec<Block>,
}

impl ParsedInsight {
    pub fn narrative(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Classifies each line by its literal prefix. No markup is interpreted.
pub fn parse(text: &str) -> ParsedInsight {
    let mut parsed = ParsedInsight::default();

    for line in text.lines() {
        let line = line.trim();
        if let Some(recipe) = line.strip_prefix(RECIPE_PREFIX) {
            if parsed.recipe.is_none() {
                parsed.recipe = Some(recipe.trim().to_string());
            }
        } else if let Some(task) = line.strip_prefix(TASK_PREFIX) {
            let task = task.trim().to_string();
            parsed.tasks.push(task.clone());
            parsed.blocks.push(Block::Task(task));
        } else if line.is_empty() {
            parsed.blocks.push(Block::Separator);
        } else {
            parsed.blocks.push(Block::Paragraph(line.to_string()));
        }
    }

    parsed
}

/// Completed tasks, keyed by their trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskChecklist {
    completed: BTreeSet<String>,
}

impl TaskChecklist {
    /// Flips `task` and returns whether it is now completed.
    pub fn toggle(&mut self, task: &str) -> bool {
        let task = task.trim();
        if self.completed.remove(task) {
            false
        } else {
            self.completed.insert(task.to_string());
            true
        }
    }

    pub fn is_done(&self, task: &str) -> bool {
        self.completed.contains(task.trim())
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}
