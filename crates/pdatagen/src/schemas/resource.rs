use crate::schema::RecordSchema;

pub(super) fn schemas() -> Vec<RecordSchema> {
    vec![RecordSchema::new(
        "Resource",
        "Resource describes the entity that produced the telemetry.",
        "resource::Resource",
    )
    .field(super::attributes_field(1))
    .field(super::dropped_count_field("dropped_attributes_count", 2))]
}
