use movie_catalog::{next_id, Record};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Record)]
struct ShowEpisode {
    id: u64,
    name: String,
}

#[derive(Clone, Debug, Record)]
#[record(collection = "box_sets")]
struct BoxSet {
    #[record(id)]
    set_number: u64,
}

#[test]
fn derive_defaults_collection_and_id_field() {
    assert_eq!(ShowEpisode::COLLECTION, "show_episodes");
    let episode = ShowEpisode {
        id: 12,
        name: "Pilot".into(),
    };
    assert_eq!(episode.id(), 12);
    assert_eq!(episode.name, "Pilot");
}

#[test]
fn derive_honours_explicit_attributes() {
    assert_eq!(BoxSet::COLLECTION, "box_sets");
    assert_eq!(BoxSet { set_number: 3 }.id(), 3);
}

#[test]
fn next_id_works_for_any_record() {
    let sets = vec![BoxSet { set_number: 3 }, BoxSet { set_number: 11 }];
    assert_eq!(next_id(&sets), Some(12));
    assert_eq!(next_id::<BoxSet>(&[]), Some(1));
    assert_eq!(next_id(&[BoxSet { set_number: u64::MAX }]), None);
}
