use super::IconDef;
use super::IconId;

pub const ICON_WIDTH: usize = 16;
pub const ICON_HEIGHT: usize = 16;
const ICON_BYTES: usize = ICON_WIDTH.div_ceil(8) * ICON_HEIGHT;

// Right-pointing triangle.
static PLAY: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x00, 0x80, 0x01, 0xC0, 0x03, 0xE0,
    0x07, 0xF0, 0x0F, 0xF8, 0x1F, 0xFC, 0x3F, 0xFE,
    0x3F, 0xFE, 0x1F, 0xFC, 0x0F, 0xF8, 0x07, 0xF0,
    0x03, 0xE0, 0x01, 0xC0, 0x00, 0x80, 0x00, 0x00,
];

// Vertical bars.
static PAUSE: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC,
    0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC,
    0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC,
    0x33, 0xCC, 0x33, 0xCC, 0x33, 0xCC, 0x00, 0x00,
];

// Heart outline.
static HEART: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x0C, 0x30, 0x12, 0x48, 0x21, 0x84,
    0x41, 0x82, 0x41, 0x82, 0x41, 0x82, 0x21, 0x84,
    0x10, 0x08, 0x08, 0x10, 0x04, 0x20, 0x02, 0x40,
    0x01, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// Thermometer, column filled in the lower half.
static TEMPERATURE: [u8; ICON_BYTES] = [
    0x00, 0xE0, 0x01, 0x10, 0x01, 0x10, 0x01, 0x10,
    0x01, 0x10, 0x01, 0x10, 0x01, 0x10, 0x01, 0xD0,
    0x01, 0xD0, 0x01, 0xD0, 0x01, 0xD0, 0x01, 0x50,
    0x01, 0x20, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00,
];

// Rounded outline holding two small rings.
static SPO2: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x07, 0xE0, 0x08, 0x10, 0x13, 0xC8,
    0x14, 0x28, 0x14, 0x28, 0x13, 0xC8, 0x10, 0x08,
    0x10, 0x08, 0x13, 0xC8, 0x14, 0x28, 0x14, 0x28,
    0x13, 0xC8, 0x08, 0x10, 0x07, 0xE0, 0x00, 0x00,
];

// ECG trace rising into a single spike.
static ECG: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
    0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x01, 0x40,
    0x01, 0x40, 0x06, 0x40, 0x18, 0x40, 0x00, 0x40,
    0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// Filled disc with a ring cut out around the centre.
static ERROR: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x07, 0xE0, 0x0F, 0xF0, 0x1F, 0xF8,
    0x1C, 0x38, 0x19, 0x98, 0x13, 0xC8, 0x17, 0xE8,
    0x17, 0xE8, 0x13, 0xC8, 0x19, 0x98, 0x1C, 0x38,
    0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xE0, 0x00, 0x00,
];

inventory::submit! {
    IconDef { id: IconId::Play, width: ICON_WIDTH, height: ICON_HEIGHT, data: &PLAY }
}

inventory::submit! {
    IconDef { id: IconId::Pause, width: ICON_WIDTH, height: ICON_HEIGHT, data: &PAUSE }
}

inventory::submit! {
    IconDef { id: IconId::Heart, width: ICON_WIDTH, height: ICON_HEIGHT, data: &HEART }
}

inventory::submit! {
    IconDef { id: IconId::Temperature, width: ICON_WIDTH, height: ICON_HEIGHT, data: &TEMPERATURE }
}

inventory::submit! {
    IconDef { id: IconId::SpO2, width: ICON_WIDTH, height: ICON_HEIGHT, data: &SPO2 }
}

inventory::submit! {
    IconDef { id: IconId::Ecg, width: ICON_WIDTH, height: ICON_HEIGHT, data: &ECG }
}

inventory::submit! {
    IconDef { id: IconId::Error, width: ICON_WIDTH, height: ICON_HEIGHT, data: &ERROR }
}
