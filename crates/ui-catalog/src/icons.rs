//! Icon font registrations
//!
//! Each icon font backend gets a flat list of identifiers with their usage.
//! Functional icons carry meaning (status, actions); decorative icons are
//! ornaments that assistive technology should skip.

use resource_resolver::{Backend, EngineBuilder, FallbackTable, ResourceDescriptor, Usage};

use Usage::{Decorative as D, Functional as F};

/// Identifier used when a functional icon is missing
pub const FUNCTIONAL_FALLBACK: &str = "QuestionCircleOutlined";

/// Identifier used when a decorative icon is missing
pub const DECORATIVE_FALLBACK: &str = "BorderOutlined";

// =============================================================================
// Icon Font A (outlined general-purpose set)
// =============================================================================

/// Outlined general-purpose icons
pub const ICON_FONT_A: &[(&str, Usage)] = &[
    // Status
    ("CheckCircleOutlined", F),
    ("CloseCircleOutlined", F),
    ("ExclamationCircleOutlined", F),
    ("InfoCircleOutlined", F),
    ("ClockCircleOutlined", F),
    ("LoadingOutlined", F),
    ("CheckOutlined", F),
    ("StopOutlined", F),
    (FUNCTIONAL_FALLBACK, F),
    // Authentication
    ("LoginOutlined", F),
    ("LogoutOutlined", F),
    ("UserOutlined", F),
    ("UserAddOutlined", F),
    ("LockOutlined", F),
    ("UnlockOutlined", F),
    ("KeyOutlined", F),
    // CRUD
    ("PlusOutlined", F),
    ("EditOutlined", F),
    ("DeleteOutlined", F),
    ("EyeOutlined", F),
    ("SaveOutlined", F),
    ("CloseOutlined", F),
    ("SearchOutlined", F),
    ("FilterOutlined", F),
    ("ReloadOutlined", F),
    ("DownloadOutlined", F),
    ("UploadOutlined", F),
    ("PrinterOutlined", F),
    // Navigation and chrome
    ("HomeOutlined", F),
    ("DashboardOutlined", F),
    ("SettingOutlined", F),
    ("ArrowLeftOutlined", F),
    ("ArrowRightOutlined", F),
    ("MenuOutlined", F),
    ("CalendarOutlined", F),
    ("BellOutlined", F),
    ("MoreOutlined", F),
    ("DownOutlined", F),
    ("UpOutlined", F),
    ("CreditCardOutlined", F),
    ("PhoneOutlined", F),
    ("MailOutlined", F),
    ("EnvironmentOutlined", F),
    ("TeamOutlined", F),
    // Ornaments
    (DECORATIVE_FALLBACK, D),
    ("StarOutlined", D),
    ("SmileOutlined", D),
    ("HeartOutlined", D),
];

// =============================================================================
// Icon Font B (material set)
// =============================================================================

/// Material icons, used for transport and amenities
pub const ICON_FONT_B: &[(&str, Usage)] = &[
    ("MdDirectionsBus", F),
    ("MdAltRoute", F),
    ("MdEventSeat", F),
    ("MdConfirmationNumber", F),
    ("MdSchedule", F),
    ("MdPlace", F),
    ("MdMap", F),
    ("MdAttachMoney", F),
    ("MdPerson", F),
    ("MdBusinessCenter", F),
    ("MdLuggage", F),
    ("MdAccessible", F),
    ("MdWifi", F),
    ("MdAcUnit", F),
    ("MdPower", F),
    ("MdLocalParking", F),
    ("MdStarBorder", D),
    ("MdBlurOn", D),
];

// =============================================================================
// Icon Font C (solid set)
// =============================================================================

/// Solid icons, used for back-office navigation and documents
pub const ICON_FONT_C: &[(&str, Usage)] = &[
    ("FaBus", F),
    ("FaRoute", F),
    ("FaTicketAlt", F),
    ("FaMapMarkerAlt", F),
    ("FaMoneyBillWave", F),
    ("FaBuilding", F),
    ("FaUsers", F),
    ("FaChartLine", F),
    ("FaQrcode", F),
    ("FaFileInvoice", F),
    ("FaRegStar", D),
];

// =============================================================================
// Icon Font D (outline set)
// =============================================================================

/// Outline icons, used in the booking flow
pub const ICON_FONT_D: &[(&str, Usage)] = &[
    ("HiOutlineTicket", F),
    ("HiOutlineTruck", F),
    ("HiOutlineMap", F),
    ("HiOutlineCurrencyDollar", F),
    ("HiOutlineClipboardList", F),
    ("HiOutlineChartBar", F),
    ("HiOutlineCog", F),
    ("HiOutlineSparkles", D),
];

/// Every icon font with its identifiers, in registration order
pub fn sets() -> [(Backend, &'static [(&'static str, Usage)]); 4] {
    [
        (Backend::IconFontA, ICON_FONT_A),
        (Backend::IconFontB, ICON_FONT_B),
        (Backend::IconFontC, ICON_FONT_C),
        (Backend::IconFontD, ICON_FONT_D),
    ]
}

/// Fallback table for icon resolution
pub fn fallbacks() -> FallbackTable {
    FallbackTable::new(
        ResourceDescriptor::functional(Backend::IconFontA, FUNCTIONAL_FALLBACK),
        ResourceDescriptor::decorative(Backend::IconFontA, DECORATIVE_FALLBACK),
    )
}

/// Register every icon and the fallback table
pub fn install(mut builder: EngineBuilder) -> EngineBuilder {
    for (backend, icons) in sets() {
        for (identifier, usage) in icons {
            builder = builder.register(ResourceDescriptor::new(backend, *identifier, *usage));
        }
    }
    builder.fallbacks(fallbacks())
}
