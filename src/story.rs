use serde::{Deserialize, Serialize};

use crate::tone::EmotionalTone;
use crate::{stable_hash64, ViralScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    Real,
    Fictional,
}

impl StoryCategory {
    pub fn label(self) -> &'static str {
        match self {
            StoryCategory::Real => "real",
            StoryCategory::Fictional => "fictional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    Draft,
    Published,
    Archived,
}

impl StoryStatus {
    pub fn label(self) -> &'static str {
        match self {
            StoryStatus::Draft => "draft",
            StoryStatus::Published => "published",
            StoryStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Reels,
    Shorts,
    Twitter,
    All,
}

/// A story as the persistence layer stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub original_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewritten_content: Option<String>,
    pub category: StoryCategory,
    pub emotional_tone: EmotionalTone,
    pub viral_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub status: StoryStatus,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
    pub category: StoryCategory,
    pub emotional_tone: EmotionalTone,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl StoryDraft {
    /// Scores the content and produces a draft record. The id is stable for the
    /// same owner, title and content.
    pub fn into_story(self, scorer: &ViralScorer, user_id: &str, timestamp: &str) -> Story {
        let analysis = scorer.analyze(&self.content, Some(self.emotional_tone));
        let payload = format!("{}\n{}\n{}", user_id, self.title, self.content);
        Story {
            id: format!("story_{:x}", stable_hash64(&payload)),
            user_id: user_id.to_string(),
            title: self.title,
            original_content: self.content,
            rewritten_content: None,
            category: self.category,
            emotional_tone: self.emotional_tone,
            viral_score: analysis.score,
            platform: None,
            status: StoryStatus::Draft,
            created_at: timestamp.to_string(),
            updated_at: timestamp.to_string(),
            is_anonymous: self.is_anonymous,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryStats {
    pub total_stories: usize,
    pub published_stories: usize,
    pub average_viral_score: u8,
    pub best_performing_story: Option<Story>,
}

impl StoryStats {
    pub fn from_stories(stories: &[Story]) -> Self {
        if stories.is_empty() {
            return StoryStats::default();
        }

        let published_stories = stories
            .iter()
            .filter(|story| story.status == StoryStatus::Published)
            .count();
        let total: u64 = stories.iter().map(|story| story.viral_score as u64).sum();
        let average = (total as f64 / stories.len() as f64).round();

        // First story to beat the running best wins ties; zero scores never qualify.
        let mut best: Option<&Story> = None;
        for story in stories {
            let current = best.map(|b| b.viral_score).unwrap_or(0);
            if story.viral_score > current {
                best = Some(story);
            }
        }

        StoryStats {
            total_stories: stories.len(),
            published_stories,
            average_viral_score: average.clamp(0.0, 100.0) as u8,
            best_performing_story: best.cloned(),
        }
    }
}

pub fn export_json(story: &Story) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(story)
}

pub const CSV_HEADER: &str = "ID,Title,Category,Status,Viral Score,Created At";

pub fn export_csv(stories: &[Story]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for story in stories {
        let fields = [
            story.id.clone(),
            story.title.clone(),
            story.category.label().to_string(),
            story.status.label().to_string(),
            story.viral_score.to_string(),
            story.created_at.clone(),
        ];
        let line: Vec<String> = fields.iter().map(|field| quote_csv(field)).collect();
        csv.push_str(&line.join(","));
        csv.push('\n');
    }
    csv
}

fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
