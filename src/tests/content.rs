use std::collections::HashSet;

use crate::content::{
    find_post, FEATURES, FEATURE_CATEGORIES, PARTNERS, PARTNER_TIERS, PLANS, POSTS,
};

#[test]
fn blog_slugs_are_unique() {
    let mut seen = HashSet::new();
    for post in POSTS {
        assert!(seen.insert(post.slug), "duplicate blog slug: {}", post.slug);
    }
}

#[test]
fn find_post_resolves_every_catalog_entry() {
    for post in POSTS {
        let found = find_post(post.slug).expect("catalog slug must resolve");
        assert_eq!(found.title, post.title);
    }
    assert!(find_post("no-such-post").is_none());
}

#[test]
fn every_feature_belongs_to_a_listed_category() {
    for feature in FEATURES {
        assert!(
            FEATURE_CATEGORIES.contains(&feature.category),
            "feature {} has unlisted category {}",
            feature.title,
            feature.category
        );
    }
}

#[test]
fn every_partner_belongs_to_a_listed_tier() {
    for partner in PARTNERS {
        assert!(
            PARTNER_TIERS.contains(&partner.tier),
            "partner {} has unlisted tier {}",
            partner.name,
            partner.tier
        );
    }
}

#[test]
fn exactly_one_plan_is_featured() {
    let featured = PLANS.iter().filter(|p| p.featured).count();
    assert_eq!(featured, 1);
}

#[test]
fn posts_have_bodies() {
    for post in POSTS {
        assert!(!post.body.is_empty(), "post {} has no body", post.slug);
    }
}
