//! Room-type catalog — standard sizes, display names, and the room library.
//!
//! The catalog is the engine's input contract with the presentation layer:
//! a fixed table mapping each room type to its standard footprint in feet,
//! plus the metadata the library panel needs to offer rooms for placement.

use serde::{Deserialize, Serialize};

use crate::plan::Dimensions;

/// Every room type the builder can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Kitchen,
    BedroomMaster,
    BedroomStandard,
    BathroomFull,
    BathroomHalf,
    Living,
    Dining,
    Office,
    Laundry,
    Staircase,
    Hallway,
    VaultedLiving,
    RoofGable,
    RoofShed,
    RoofHip,
}

impl RoomType {
    /// All room types, in library order.
    pub const ALL: [RoomType; 15] = [
        RoomType::Kitchen,
        RoomType::BedroomMaster,
        RoomType::BedroomStandard,
        RoomType::BathroomFull,
        RoomType::BathroomHalf,
        RoomType::Living,
        RoomType::Dining,
        RoomType::Office,
        RoomType::Laundry,
        RoomType::Staircase,
        RoomType::Hallway,
        RoomType::VaultedLiving,
        RoomType::RoofGable,
        RoomType::RoofShed,
        RoomType::RoofHip,
    ];

    /// Standard footprint in feet. Living rooms are resizable in principle;
    /// this is the default the library drops with.
    pub fn standard_size(&self) -> Dimensions {
        let (width, length) = match self {
            RoomType::Kitchen => (15.0, 16.0),
            RoomType::BedroomMaster => (15.0, 16.0),
            RoomType::BedroomStandard => (12.0, 14.0),
            RoomType::BathroomFull => (8.0, 10.0),
            RoomType::BathroomHalf => (6.0, 8.0),
            RoomType::Living => (16.0, 20.0),
            RoomType::Dining => (12.0, 14.0),
            RoomType::Office => (12.0, 12.0),
            RoomType::Laundry => (8.0, 8.0),
            RoomType::Staircase => (4.0, 8.0),
            RoomType::Hallway => (4.0, 10.0),
            RoomType::VaultedLiving => (16.0, 25.0),
            // Roof rooms cover a full module
            RoomType::RoofGable => (16.0, 65.0),
            RoomType::RoofShed => (16.0, 65.0),
            RoomType::RoofHip => (16.0, 65.0),
        };
        Dimensions::new(width, length)
    }

    /// Display name used when the library drops a room onto the canvas.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::Kitchen => "Kitchen",
            RoomType::BedroomMaster => "Master Bedroom",
            RoomType::BedroomStandard => "Bedroom",
            RoomType::BathroomFull => "Full Bath",
            RoomType::BathroomHalf => "Half Bath",
            RoomType::Living => "Living Room",
            RoomType::Dining => "Dining Room",
            RoomType::Office => "Office",
            RoomType::Laundry => "Laundry",
            RoomType::Staircase => "Staircase",
            RoomType::Hallway => "Hallway",
            RoomType::VaultedLiving => "Vaulted Living Room",
            RoomType::RoofGable => "Gable Roof",
            RoomType::RoofShed => "Shed Roof",
            RoomType::RoofHip => "Hip Roof",
        }
    }

    /// True for room types that inherently span two vertical levels.
    pub fn is_multi_story(&self) -> bool {
        matches!(self, RoomType::VaultedLiving | RoomType::Staircase)
    }
}

/// One entry in the room library panel.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryEntry {
    pub room_type: RoomType,
    pub label: &'static str,
    pub category: &'static str,
    pub multi_story: bool,
}

/// The room library, grouped the way the panel presents it.
pub fn room_library() -> Vec<LibraryEntry> {
    fn entry(room_type: RoomType, label: &'static str, category: &'static str) -> LibraryEntry {
        LibraryEntry {
            room_type,
            label,
            category,
            multi_story: room_type.is_multi_story(),
        }
    }
    vec![
        entry(RoomType::Kitchen, "Kitchen", "Living"),
        entry(RoomType::Living, "Living Room", "Living"),
        entry(RoomType::VaultedLiving, "Vaulted Living (2-Story)", "Living"),
        entry(RoomType::Dining, "Dining Room", "Living"),
        entry(RoomType::BedroomMaster, "Master Bedroom", "Bedrooms"),
        entry(RoomType::BedroomStandard, "Bedroom", "Bedrooms"),
        entry(RoomType::BathroomFull, "Full Bath", "Bathrooms"),
        entry(RoomType::BathroomHalf, "Half Bath", "Bathrooms"),
        entry(RoomType::Office, "Office", "Other"),
        entry(RoomType::Laundry, "Laundry", "Other"),
        entry(RoomType::Staircase, "Staircase (2-Story)", "Other"),
        entry(RoomType::Hallway, "Hallway", "Other"),
        entry(RoomType::RoofGable, "Gable Roof", "Roof"),
        entry(RoomType::RoofShed, "Shed Roof", "Roof"),
        entry(RoomType::RoofHip, "Hip Roof", "Roof"),
    ]
}
