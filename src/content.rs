use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectIcon {
    Brain,
    Terminal,
    Cpu,
    Database,
    Chart,
}

impl ProjectIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ProjectIcon::Brain => "🧠",
            ProjectIcon::Terminal => "💻",
            ProjectIcon::Cpu => "🖥️",
            ProjectIcon::Database => "🗄️",
            ProjectIcon::Chart => "📊",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub video_url: String,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub icon: ProjectIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub email: String,
    pub copyright: String,
}

// All page content lives here; the components only render what these return.

pub fn profile() -> Profile {
    Profile {
        name: "Your Name".to_string(),
        headline: "AI/ML Developer Portfolio".to_string(),
        tagline:
            "Crafting intelligent solutions at the intersection of artificial intelligence and machine learning"
                .to_string(),
        github_url: "https://github.com/yourusername".to_string(),
        linkedin_url: "https://linkedin.com/in/yourusername".to_string(),
        email: "your.email@example.com".to_string(),
        copyright: "© 2024 Your Name. Crafted with ♦ and AI".to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "AI Image Recognition System".to_string(),
            description: "Developed a deep learning model using TensorFlow and CNN architecture to classify images with 95% accuracy. Implemented transfer learning using ResNet50.".to_string(),
            technologies: vec![
                "Python".to_string(),
                "TensorFlow".to_string(),
                "OpenCV".to_string(),
                "Flask".to_string(),
            ],
            video_url: "https://www.youtube.com/embed/your-video-id-1".to_string(),
            github_url: Some("https://github.com/yourusername/image-recognition".to_string()),
            demo_url: Some("https://demo-url-1.com".to_string()),
            icon: ProjectIcon::Brain,
        },
        Project {
            title: "Natural Language Processing Chatbot".to_string(),
            description: "Built an intelligent chatbot using BERT and transformers for natural language understanding. Handles multiple intents and provides contextual responses.".to_string(),
            technologies: vec![
                "Python".to_string(),
                "PyTorch".to_string(),
                "Transformers".to_string(),
                "FastAPI".to_string(),
            ],
            video_url: "https://www.youtube.com/embed/your-video-id-2".to_string(),
            github_url: Some("https://github.com/yourusername/nlp-chatbot".to_string()),
            demo_url: Some("https://demo-url-2.com".to_string()),
            icon: ProjectIcon::Terminal,
        },
        Project {
            title: "Predictive Analytics Dashboard".to_string(),
            description: "Created a machine learning pipeline for time series forecasting with interactive visualizations and real-time predictions.".to_string(),
            technologies: vec![
                "Scikit-learn".to_string(),
                "Prophet".to_string(),
                "Streamlit".to_string(),
                "Pandas".to_string(),
            ],
            video_url: "https://www.youtube.com/embed/your-video-id-3".to_string(),
            github_url: Some("https://github.com/yourusername/analytics-dashboard".to_string()),
            demo_url: Some("https://demo-url-3.com".to_string()),
            icon: ProjectIcon::Database,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_fully_populated() {
        let projects = projects();
        assert!(!projects.is_empty());
        for project in &projects {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.technologies.is_empty());
            assert!(!project.video_url.is_empty());
            for tech in &project.technologies {
                assert!(!tech.is_empty());
            }
        }
    }

    #[test]
    fn test_content_is_stable_across_calls() {
        assert_eq!(projects(), projects());
        assert_eq!(profile(), profile());
    }

    #[test]
    fn test_projects_keep_definition_order() {
        let titles = projects()
            .into_iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "AI Image Recognition System",
                "Natural Language Processing Chatbot",
                "Predictive Analytics Dashboard",
            ]
        );
    }

    #[test]
    fn test_technologies_keep_definition_order() {
        let first = &projects()[0];
        assert_eq!(
            first.technologies,
            vec!["Python", "TensorFlow", "OpenCV", "Flask"]
        );
    }

    #[test]
    fn test_profile_contact_fields_populated() {
        let profile = profile();
        assert!(!profile.github_url.is_empty());
        assert!(!profile.linkedin_url.is_empty());
        assert!(!profile.email.is_empty());
        assert!(!profile.copyright.is_empty());
    }
}
