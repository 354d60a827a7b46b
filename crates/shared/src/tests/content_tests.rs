use super::*;

#[test]
fn built_in_catalogue_is_valid() {
    let content = SiteContent::default();
    content.validate().expect("default content validates");

    assert_eq!(content.projects.len(), 7);
    assert_eq!(content.skills.len(), 9);
    assert_eq!(content.familiar.len(), 12);
    assert_eq!(content.socials.len(), 3);
    assert_eq!(
        content.projects.iter().filter(|project| project.origin).count(),
        1
    );
}

#[test]
fn partial_file_keeps_built_in_sections() {
    let raw = r##"
owner = "Sam"

[[skills]]
name = "Rust"
level = 60
color = "#dea584"
"##;

    let content = SiteContent::from_toml_str(raw).expect("parse");
    assert_eq!(content.owner, "Sam");
    assert_eq!(content.skills.len(), 1);
    assert_eq!(content.skills[0].name, "Rust");
    assert_eq!(content.projects, SiteContent::default().projects);
}

#[test]
fn rejects_skill_level_above_one_hundred() {
    let raw = r##"
[[skills]]
name = "Overconfidence"
level = 140
color = "#fff"
"##;

    let err = SiteContent::from_toml_str(raw).expect_err("level out of range");
    assert!(matches!(
        err,
        ContentError::InvalidSkillLevel { level: 140, .. }
    ));
}

#[test]
fn rejects_blank_skill_name() {
    let raw = r##"
[[skills]]
name = "  "
level = 10
color = "#fff"
"##;

    let err = SiteContent::from_toml_str(raw).expect_err("blank name");
    assert!(matches!(err, ContentError::EmptySkillName { index: 0 }));
}

#[test]
fn rejects_duplicate_project_titles() {
    let raw = r#"
[[projects]]
title = "Twice"
desc = "first"

[[projects]]
title = "Twice"
desc = "second"
"#;

    let err = SiteContent::from_toml_str(raw).expect_err("duplicate title");
    assert!(matches!(err, ContentError::DuplicateProject(title) if title == "Twice"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = SiteContent::from_toml_str("projects = 3").expect_err("wrong type");
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join("portfolio_content_that_does_not_exist.toml");
    let err = SiteContent::load(&path).expect_err("missing file");
    assert!(err.to_string().contains("portfolio_content_that_does_not_exist"));
}

#[test]
fn bundled_demo_content_overrides_skills_only() {
    let content =
        SiteContent::from_toml_str(include_str!("../../../../demos/content.toml")).expect("demo");
    assert_eq!(content.owner, "Sam Example");
    assert_eq!(content.skills.len(), 2);
    assert_eq!(content.socials, SiteContent::default().socials);
}
