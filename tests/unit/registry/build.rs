use super::*;
use crate::choreography::reveal::RelatedTrigger;
use crate::foundation::core::Rect;
use crate::geometry::layout::PageLayout;
use crate::registry::model::{
    AnimationDef, HeroDef, ParallaxDef, RelatedDef, RevealGroupDef, SceneDef, StickyDef,
};

fn page() -> PageLayout {
    let mut l = PageLayout::new();
    let hero = l.insert("hero", None, Rect::new(0.0, 0.0, 1200.0, 600.0));
    l.insert("hero-title", Some(hero), Rect::new(0.0, 200.0, 1200.0, 320.0));
    let body = l.insert("body", None, Rect::new(0.0, 600.0, 1200.0, 4600.0));
    l.insert("p1", Some(body), Rect::new(0.0, 100.0, 800.0, 220.0));
    l.insert("p2", Some(body), Rect::new(0.0, 300.0, 800.0, 420.0));
    l.insert("aside", Some(body), Rect::new(860.0, 100.0, 1160.0, 500.0));
    l.insert("scene-a", None, Rect::new(0.0, 5200.0, 1200.0, 6200.0));
    l.insert("scene-b", None, Rect::new(0.0, 6400.0, 1200.0, 7400.0));
    l.insert("logo", None, Rect::new(0.0, 5500.0, 200.0, 5700.0));
    l.insert("related", None, Rect::new(0.0, 7600.0, 1200.0, 8200.0));
    l.insert("related-title", None, Rect::new(0.0, 7600.0, 1200.0, 7650.0));
    l.insert("card-1", None, Rect::new(0.0, 7700.0, 400.0, 8100.0));
    l.insert("card-2", None, Rect::new(400.0, 7700.0, 800.0, 8100.0));
    l
}

fn full_def() -> ChoreographyDef {
    ChoreographyDef {
        content: Some("body".into()),
        hero: Some(HeroDef {
            region: "hero".into(),
            speed: None,
            content: Some("hero-title".into()),
        }),
        parallax: vec![ParallaxDef {
            region: "logo".into(),
            speed: Some(0.5),
        }],
        reveal: vec![RevealGroupDef {
            members: vec!["p1".into(), "p2".into()],
            stagger_secs: None,
        }],
        scenes: vec![
            SceneDef {
                region: "scene-a".into(),
                background: None,
                text: Vec::new(),
                animations: vec![AnimationDef {
                    target: "logo".into(),
                    kind: crate::animation::dispatch::AnimationKind::Rotate,
                    start: None,
                    end: None,
                    ease: crate::animation::ease::Ease::Linear,
                }],
            },
            SceneDef {
                region: "scene-b".into(),
                background: None,
                text: Vec::new(),
                animations: Vec::new(),
            },
        ],
        sticky: vec![StickyDef {
            region: "aside".into(),
            container: None,
            offset: None,
        }],
        related: Some(RelatedDef {
            section: "related".into(),
            title: Some("related-title".into()),
            cards: vec!["card-1".into(), "card-2".into()],
            trigger: RelatedTrigger::Scroll,
        }),
        ..ChoreographyDef::default()
    }
}

#[test]
fn resolves_names_and_applies_defaults() {
    let layout = page();
    let reg = Registry::build(&full_def(), &layout).unwrap();

    assert_eq!(reg.content(), layout.id("body"));
    assert_eq!(reg.parallax().len(), 2);
    let hero = &reg.parallax()[0];
    assert!(hero.hero);
    assert_eq!(hero.speed, 0.3);
    assert_eq!(hero.content_fade_target, layout.id("hero-title"));
    assert_eq!(reg.parallax()[1].speed, 0.5);

    assert_eq!(reg.reveal()[0].delays, vec![0.0, 0.05]);

    let anim = &reg.scenes()[0].custom_animations[0];
    assert_eq!(anim.window.start(), 0.2);
    assert_eq!(anim.window.end(), 0.8);

    let sticky = &reg.sticky()[0];
    assert_eq!(Some(sticky.container), layout.id("body"));
    assert_eq!(sticky.offset, 20.0);

    let related = reg.related().unwrap();
    assert_eq!(related.cards.len(), 2);
    assert_eq!(related.title, layout.id("related-title"));
}

#[test]
fn negative_parallax_speed_builds() {
    let layout = page();
    let mut def = full_def();
    def.parallax[0].speed = Some(-0.3);
    let reg = Registry::build(&def, &layout).unwrap();
    assert_eq!(reg.parallax()[1].speed, -0.3);

    let mut def = full_def();
    def.parallax[0].speed = Some(f64::NAN);
    let err = Registry::build(&def, &layout).unwrap_err().to_string();
    assert!(err.contains("$.parallax[0].speed"), "{err}");
}

#[test]
fn tracked_regions_are_sorted_and_unique() {
    let layout = page();
    let reg = Registry::build(&full_def(), &layout).unwrap();
    let tracked = reg.tracked_regions();
    assert!(tracked.windows(2).all(|w| w[0] < w[1]));
    for name in ["body", "hero", "logo", "p1", "aside", "scene-b", "related"] {
        assert!(tracked.contains(&layout.id(name).unwrap()), "{name}");
    }
    // Text and cards never need geometry.
    assert!(!tracked.contains(&layout.id("card-1").unwrap()));
}

#[test]
fn labels_use_layout_names() {
    let layout = page();
    let reg = Registry::build(&full_def(), &layout).unwrap();
    let aside = layout.id("aside").unwrap();
    assert_eq!(reg.label(EntityId::Region(aside)), "aside");
    assert_eq!(reg.label(EntityId::ProgressBar), "progress-bar");
    assert_eq!(reg.label(EntityId::Region(RegionId(999))), "region:999");
}

#[test]
fn unknown_regions_are_reported_with_paths() {
    let mut def = full_def();
    def.parallax[0].region = "nope".into();
    def.related.as_mut().unwrap().cards[1] = "card-9".into();
    let err = Registry::build(&def, &page()).unwrap_err().to_string();
    assert!(err.contains("$.parallax[0].region: unknown region \"nope\""), "{err}");
    assert!(err.contains("$.related.cards[1]: unknown region \"card-9\""), "{err}");
}

#[test]
fn scenes_out_of_page_order_are_rejected() {
    let mut def = full_def();
    def.scenes.swap(0, 1);
    let err = Registry::build(&def, &page()).unwrap_err();
    assert!(matches!(err, ChoreoError::Validation(_)));
    assert!(err.to_string().contains("$.scenes[1].region"), "{err}");
}

#[test]
fn backwards_window_is_rejected_at_build() {
    let mut def = full_def();
    def.scenes[0].animations[0].start = Some(0.9);
    def.scenes[0].animations[0].end = Some(0.1);
    let err = Registry::build(&def, &page()).unwrap_err().to_string();
    assert!(err.contains("$.scenes[0].animations[0]"), "{err}");
}

#[test]
fn root_level_sticky_needs_explicit_container() {
    let mut def = full_def();
    def.sticky[0].region = "logo".into();
    let err = Registry::build(&def, &page()).unwrap_err().to_string();
    assert!(err.contains("$.sticky[0].container"), "{err}");

    def.sticky[0].container = Some("scene-a".into());
    assert!(Registry::build(&def, &page()).is_ok());
}

/// Host-side geometry that is not a `PageLayout`: regions stacked 400px apart.
struct Strip {
    names: Vec<&'static str>,
}

impl GeometrySource for Strip {
    fn offset_box(&self, region: RegionId) -> Option<Rect> {
        self.names.get(region.index())?;
        let top = 400.0 * region.index() as f64;
        Some(Rect::new(0.0, top, 1000.0, top + 400.0))
    }

    fn offset_parent(&self, _region: RegionId) -> Option<RegionId> {
        None
    }
}

impl RegionNames for Strip {
    fn region_id(&self, name: &str) -> Option<RegionId> {
        let i = self.names.iter().position(|n| *n == name)?;
        Some(RegionId(i as u32))
    }

    fn region_name(&self, region: RegionId) -> Option<&str> {
        self.names.get(region.index()).copied()
    }
}

#[test]
fn builds_against_any_named_geometry_source() {
    let strip = Strip {
        names: vec!["band", "scene-a", "scene-b"],
    };
    let scene = |name: &str| SceneDef {
        region: name.into(),
        background: None,
        text: Vec::new(),
        animations: Vec::new(),
    };
    let def = ChoreographyDef {
        parallax: vec![ParallaxDef {
            region: "band".into(),
            speed: Some(-0.2),
        }],
        scenes: vec![scene("scene-a"), scene("scene-b")],
        ..ChoreographyDef::default()
    };

    let reg = Registry::build(&def, &strip).unwrap();
    assert_eq!(reg.parallax()[0].region, RegionId(0));
    assert_eq!(reg.label(EntityId::Region(RegionId(2))), "scene-b");

    let reversed = ChoreographyDef {
        scenes: vec![scene("scene-b"), scene("scene-a")],
        ..def
    };
    let err = Registry::build(&reversed, &strip).unwrap_err().to_string();
    assert!(err.contains("$.scenes[1].region"), "{err}");
}
