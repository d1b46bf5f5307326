use serde_json::{json, Value};

use crate::content::{Profile, Project};

/// Schema.org description of the page owner and the showcased projects,
/// embedded in the page as an `application/ld+json` block.
pub fn structured_data(profile: &Profile, projects: &[Project]) -> Value {
    let items = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let mut item = json!({
                "@type": "SoftwareSourceCode",
                "name": project.title,
                "description": project.description,
                "keywords": project.technologies,
                "video": {
                    "@type": "VideoObject",
                    "name": project.title,
                    "embedUrl": project.video_url,
                },
            });
            if let Some(url) = &project.github_url {
                item["codeRepository"] = json!(url);
            }
            if let Some(url) = &project.demo_url {
                item["url"] = json!(url);
            }
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": item,
            })
        })
        .collect::<Vec<_>>();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Person",
                "name": profile.name,
                "email": profile.email,
                "sameAs": [profile.github_url, profile.linkedin_url],
            },
            {
                "@type": "ItemList",
                "name": profile.headline,
                "numberOfItems": projects.len(),
                "itemListElement": items,
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{self, ProjectIcon};

    fn record(github_url: Option<&str>, demo_url: Option<&str>) -> Project {
        Project {
            title: "X".to_string(),
            description: "Y".to_string(),
            technologies: vec!["A".to_string(), "B".to_string()],
            video_url: "u1".to_string(),
            github_url: github_url.map(str::to_string),
            demo_url: demo_url.map(str::to_string),
            icon: ProjectIcon::Chart,
        }
    }

    fn item_list(data: &Value) -> &Vec<Value> {
        data["@graph"][1]["itemListElement"]
            .as_array()
            .expect("item list should be an array")
    }

    #[test]
    fn test_one_list_item_per_project_in_order() {
        let profile = content::profile();
        let projects = content::projects();
        let data = structured_data(&profile, &projects);

        let items = item_list(&data);
        assert_eq!(items.len(), projects.len());
        for (i, (item, project)) in items.iter().zip(&projects).enumerate() {
            assert_eq!(item["position"], json!(i + 1));
            assert_eq!(item["item"]["name"], json!(project.title));
        }
        assert_eq!(data["@graph"][1]["numberOfItems"], json!(projects.len()));
    }

    #[test]
    fn test_person_has_both_profile_links_and_email() {
        let profile = content::profile();
        let data = structured_data(&profile, &[]);

        let person = &data["@graph"][0];
        assert_eq!(
            person["sameAs"],
            json!([profile.github_url, profile.linkedin_url])
        );
        assert_eq!(person["email"], json!(profile.email));
    }

    #[test]
    fn test_optional_links_reflected_independently() {
        let profile = content::profile();
        let data = structured_data(&profile, &[record(None, Some("d1"))]);

        let item = &item_list(&data)[0]["item"];
        assert!(item.get("codeRepository").is_none());
        assert_eq!(item["url"], json!("d1"));
        assert_eq!(item["video"]["embedUrl"], json!("u1"));
    }

    #[test]
    fn test_keywords_keep_order_and_duplicates() {
        let profile = content::profile();
        let mut project = record(Some("g1"), None);
        project.technologies = vec!["A".to_string(), "A".to_string(), "B".to_string()];
        let data = structured_data(&profile, &[project]);

        let item = &item_list(&data)[0]["item"];
        assert_eq!(item["keywords"], json!(["A", "A", "B"]));
        assert_eq!(item["codeRepository"], json!("g1"));
        assert!(item.get("url").is_none());
    }

    #[test]
    fn test_empty_project_list_is_valid() {
        let profile = content::profile();
        let data = structured_data(&profile, &[]);

        assert!(item_list(&data).is_empty());
        assert_eq!(data["@graph"][1]["numberOfItems"], json!(0));
    }
}
