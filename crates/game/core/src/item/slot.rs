//! Equipment slots.

/// Where an item is worn.
///
/// Items whose slot is [`EquipmentSlot::None`] can sit in an inventory but
/// can never be equipped.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Head,
    Chest,
    Arms,
    Legs,
    Generator,
    LeftArmWeapon,
    RightArmWeapon,
    LeftShoulderWeapon,
    RightShoulderWeapon,
    None,
}

impl EquipmentSlot {
    /// Every slot an item can actually occupy.
    pub const EQUIPPABLE: [EquipmentSlot; 9] = [
        Self::Head,
        Self::Chest,
        Self::Arms,
        Self::Legs,
        Self::Generator,
        Self::LeftArmWeapon,
        Self::RightArmWeapon,
        Self::LeftShoulderWeapon,
        Self::RightShoulderWeapon,
    ];

    pub const fn is_equippable(&self) -> bool {
        !matches!(self, Self::None)
    }
}
