use crate::core::animation::{default_animated_selectors, DEFAULT_REVEAL_CLASS};
use crate::core::content::{default_projects, default_skill_categories, ContentStore, DEFAULT_TITLE};
use crate::core::navigation::DEFAULT_NAV_HEIGHT;
use crate::core::view_model::ViewSettings;
use crate::domain::model::{ObserverOptions, Project, RootMargin, SkillCategory};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Site file. Every section may be omitted and falls back to the built-in
/// portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub navigation: NavigationConfig,
    pub animation: AnimationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_categories: Option<Vec<SkillCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub resume_url: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            resume_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub nav_height: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            nav_height: DEFAULT_NAV_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub threshold: f64,
    /// CSS margin shorthand, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
    pub reveal_class: String,
    pub selectors: Vec<String>,
    pub registration_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            reveal_class: DEFAULT_REVEAL_CLASS.to_string(),
            selectors: default_animated_selectors(),
            registration_delay_ms: 100,
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESUME_URL})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn title(&self) -> &str {
        &self.site.title
    }

    pub fn skill_categories(&self) -> Vec<SkillCategory> {
        self.skill_categories
            .clone()
            .unwrap_or_else(default_skill_categories)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone().unwrap_or_else(default_projects)
    }

    pub fn observer_options(&self) -> Result<ObserverOptions> {
        Ok(ObserverOptions {
            threshold: self.animation.threshold,
            root_margin: RootMargin::parse(&self.animation.root_margin)?,
        })
    }

    pub fn registration_delay(&self) -> Duration {
        Duration::from_millis(self.animation.registration_delay_ms)
    }

    /// Immutable content for the page.
    pub fn content_store(&self) -> ContentStore {
        ContentStore::new(self.title(), self.skill_categories(), self.projects())
    }

    pub fn view_settings(&self) -> Result<ViewSettings> {
        Ok(ViewSettings {
            nav_height: self.navigation.nav_height,
            observer: self.observer_options()?,
            reveal_class: self.animation.reveal_class.clone(),
            animated_selectors: self.animation.selectors.clone(),
            registration_delay: self.registration_delay(),
            resume_url: self.site.resume_url.clone(),
        })
    }

    fn validate_animation(&self) -> Result<()> {
        validate_range("animation.threshold", self.animation.threshold, 0.0, 1.0)?;
        RootMargin::parse(&self.animation.root_margin)?;
        validate_non_empty_string("animation.reveal_class", &self.animation.reveal_class)?;
        validate_non_empty_list("animation.selectors", &self.animation.selectors)?;

        for selector in &self.animation.selectors {
            let name = selector
                .strip_prefix('.')
                .or_else(|| selector.strip_prefix('#'));
            if name.map_or(true, |n| n.trim().is_empty()) {
                return Err(PortfolioError::InvalidConfigValueError {
                    field: "animation.selectors".to_string(),
                    value: selector.clone(),
                    reason: "Only '.class' and '#id' selectors are supported".to_string(),
                });
            }
        }
        Ok(())
    }

    fn validate_content(&self) -> Result<()> {
        let categories = self.skill_categories();
        validate_non_empty_list("skill_categories", &categories)?;
        for (i, category) in categories.iter().enumerate() {
            validate_non_empty_string(&format!("skill_categories[{}].name", i), &category.name)?;
            validate_non_empty_list(&format!("skill_categories[{}].skills", i), &category.skills)?;
            for (j, skill) in category.skills.iter().enumerate() {
                let field = format!("skill_categories[{}].skills[{}]", i, j);
                validate_non_empty_string(&format!("{}.name", field), &skill.name)?;
                validate_range(&format!("{}.level", field), skill.level, 0, 100)?;
            }
        }

        let projects = self.projects();
        validate_non_empty_list("projects", &projects)?;
        for (i, project) in projects.iter().enumerate() {
            validate_non_empty_string(&format!("projects[{}].title", i), &project.title)?;
            validate_non_empty_list(&format!("projects[{}].technologies", i), &project.technologies)?;
            validate_url(&format!("projects[{}].live_url", i), &project.live_url)?;
            validate_url(&format!("projects[{}].github_url", i), &project.github_url)?;
        }
        Ok(())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.title", &self.site.title)?;
        if let Some(url) = &self.site.resume_url {
            validate_url("site.resume_url", url)?;
        }
        validate_range("navigation.nav_height", self.navigation.nav_height, 0.0, f64::MAX)?;
        self.validate_animation()?;
        self.validate_content()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
