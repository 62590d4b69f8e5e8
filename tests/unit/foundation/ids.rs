use super::*;
use std::collections::BTreeMap;

#[test]
fn progress_bar_sorts_before_regions() {
    let mut ids = vec![
        EntityId::Region(RegionId(2)),
        EntityId::ProgressBar,
        EntityId::from(RegionId(0)),
    ];
    ids.sort();
    assert_eq!(
        ids,
        vec![
            EntityId::ProgressBar,
            EntityId::Region(RegionId(0)),
            EntityId::Region(RegionId(2)),
        ]
    );
}

#[test]
fn entity_ids_work_as_json_keys() {
    let mut m = BTreeMap::new();
    m.insert(EntityId::Region(RegionId(12)), 1);
    m.insert(EntityId::ProgressBar, 0);
    assert_eq!(
        serde_json::to_string(&m).unwrap(),
        r#"{"progress-bar":0,"region:12":1}"#
    );
}
