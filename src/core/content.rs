use crate::domain::model::{Project, Skill, SkillCategory};

pub const DEFAULT_TITLE: &str = "Alex Johnson Portfolio";

/// Read-only skills and projects shown on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    title: String,
    skill_categories: Vec<SkillCategory>,
    projects: Vec<Project>,
}

impl ContentStore {
    pub fn new(
        title: impl Into<String>,
        skill_categories: Vec<SkillCategory>,
        projects: Vec<Project>,
    ) -> Self {
        Self {
            title: title.into(),
            skill_categories,
            projects,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skill_categories
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, default_skill_categories(), default_projects())
    }
}

fn category(name: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        skills: skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
            })
            .collect(),
    }
}

fn project(
    title: &str,
    description: &str,
    technologies: &[&str],
    live_url: &str,
    github_url: &str,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_url: live_url.to_string(),
        github_url: github_url.to_string(),
    }
}

pub fn default_skill_categories() -> Vec<SkillCategory> {
    vec![
        category(
            "Frontend Technologies",
            &[
                ("Angular", 95),
                ("React", 88),
                ("TypeScript", 92),
                ("JavaScript", 94),
                ("HTML/CSS", 96),
                ("SCSS/Sass", 90),
            ],
        ),
        category(
            "Backend Technologies",
            &[
                ("Node.js", 85),
                ("Express.js", 82),
                ("Python", 78),
                ("MongoDB", 80),
                ("PostgreSQL", 75),
                ("RESTful APIs", 88),
            ],
        ),
        category(
            "Tools & Technologies",
            &[
                ("Git/GitHub", 92),
                ("Docker", 70),
                ("AWS", 68),
                ("Webpack", 75),
                ("Jest/Testing", 80),
                ("Figma/Design", 72),
            ],
        ),
    ]
}

pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "E-Commerce Platform",
            "A full-stack e-commerce solution built with Angular and Node.js, featuring user authentication, shopping cart, payment integration, and admin dashboard.",
            &["Angular", "Node.js", "MongoDB", "Stripe API", "JWT"],
            "https://ecommerce-demo.vercel.app",
            "https://github.com/alexjohnson/ecommerce-platform",
        ),
        project(
            "Task Management App",
            "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
            &["React", "Socket.io", "Express.js", "PostgreSQL", "Material-UI"],
            "https://taskmanager-pro.netlify.app",
            "https://github.com/alexjohnson/task-manager",
        ),
        project(
            "Weather Dashboard",
            "A responsive weather application with location-based forecasts, interactive maps, and weather alerts using multiple weather APIs.",
            &["Vue.js", "OpenWeather API", "Chart.js", "Geolocation", "PWA"],
            "https://weather-dashboard-vue.vercel.app",
            "https://github.com/alexjohnson/weather-dashboard",
        ),
        project(
            "Portfolio Website",
            "A modern, responsive portfolio website showcasing projects and skills with smooth animations and optimal performance.",
            &["Angular", "SCSS", "TypeScript", "Animations", "Responsive"],
            "https://alexjohnson-portfolio.netlify.app",
            "https://github.com/alexjohnson/portfolio",
        ),
        project(
            "Social Media Analytics",
            "A comprehensive analytics dashboard for social media metrics with data visualization and performance tracking.",
            &["React", "D3.js", "Python", "Flask", "Chart.js"],
            "https://social-analytics-dashboard.vercel.app",
            "https://github.com/alexjohnson/social-analytics",
        ),
        project(
            "Fitness Tracker App",
            "A mobile-first fitness tracking application with workout plans, progress tracking, and nutritional guidance.",
            &["React Native", "Firebase", "Redux", "Health APIs", "Push Notifications"],
            "https://fitness-tracker-app.expo.dev",
            "https://github.com/alexjohnson/fitness-tracker",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_populated() {
        let store = ContentStore::default();
        assert_eq!(store.title(), "Alex Johnson Portfolio");
        assert_eq!(store.skill_categories().len(), 3);
        assert!(store
            .skill_categories()
            .iter()
            .all(|c| c.skills.len() == 6 && c.skills.iter().all(|s| s.level <= 100)));
        assert_eq!(store.projects().len(), 6);
        assert!(store
            .projects()
            .iter()
            .all(|p| !p.title.is_empty() && !p.technologies.is_empty()));
    }

    #[test]
    fn test_accessors_preserve_order() {
        let store = ContentStore::default();
        let names: Vec<&str> = store
            .skill_categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Frontend Technologies",
                "Backend Technologies",
                "Tools & Technologies"
            ]
        );
        assert_eq!(store.projects()[0].title, "E-Commerce Platform");
        assert_eq!(store.projects()[5].title, "Fitness Tracker App");
    }
}
