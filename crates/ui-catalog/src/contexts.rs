//! Semantic icon contexts
//!
//! Screens ask for icons by `(context, action)`; this module is the single
//! place where those pairs are bound to concrete icons.

use resource_resolver::{Backend, ContextDefinition, EngineBuilder};

/// Login, registration and account actions
pub fn authentication() -> ContextDefinition {
    ContextDefinition::new("authentication").primitives(
        Backend::IconFontA,
        [
            ("login", "LoginOutlined"),
            ("logout", "LogoutOutlined"),
            ("register", "UserAddOutlined"),
            ("profile", "UserOutlined"),
            ("password", "LockOutlined"),
            ("unlock", "UnlockOutlined"),
            ("api-key", "KeyOutlined"),
        ],
    )
}

/// Record management actions shared by every admin table
pub fn crud_actions() -> ContextDefinition {
    ContextDefinition::new("crud-actions").primitives(
        Backend::IconFontA,
        [
            ("create", "PlusOutlined"),
            ("view", "EyeOutlined"),
            ("edit", "EditOutlined"),
            ("delete", "DeleteOutlined"),
            ("save", "SaveOutlined"),
            ("cancel", "CloseOutlined"),
            ("search", "SearchOutlined"),
            ("filter", "FilterOutlined"),
            ("refresh", "ReloadOutlined"),
            ("export", "DownloadOutlined"),
            ("import", "UploadOutlined"),
            ("print", "PrinterOutlined"),
        ],
    )
}

/// Record and operation states
pub fn status() -> ContextDefinition {
    ContextDefinition::new("status").primitives(
        Backend::IconFontA,
        [
            ("success", "CheckCircleOutlined"),
            ("error", "CloseCircleOutlined"),
            ("warning", "ExclamationCircleOutlined"),
            ("info", "InfoCircleOutlined"),
            ("pending", "ClockCircleOutlined"),
            ("loading", "LoadingOutlined"),
            ("active", "CheckOutlined"),
            ("inactive", "StopOutlined"),
        ],
    )
}

/// Sidebar and header navigation
pub fn navigation() -> ContextDefinition {
    ContextDefinition::new("navigation")
        .primitives(
            Backend::IconFontA,
            [
                ("home", "HomeOutlined"),
                ("dashboard", "DashboardOutlined"),
                ("settings", "SettingOutlined"),
                ("back", "ArrowLeftOutlined"),
                ("forward", "ArrowRightOutlined"),
                ("menu", "MenuOutlined"),
            ],
        )
        .primitives(
            Backend::IconFontC,
            [
                ("routes", "FaRoute"),
                ("operators", "FaBuilding"),
                ("tickets", "FaTicketAlt"),
                ("passengers", "FaUsers"),
                ("reports", "FaChartLine"),
            ],
        )
}

/// Buses, routes and trips
pub fn transport() -> ContextDefinition {
    ContextDefinition::new("transport")
        .primitives(
            Backend::IconFontB,
            [
                ("bus", "MdDirectionsBus"),
                ("route", "MdAltRoute"),
                ("seat", "MdEventSeat"),
                ("ticket", "MdConfirmationNumber"),
                ("schedule", "MdSchedule"),
                ("stop", "MdPlace"),
                ("map", "MdMap"),
                ("fare", "MdAttachMoney"),
                ("driver", "MdPerson"),
                ("operator", "MdBusinessCenter"),
            ],
        )
        .primitive("fleet", Backend::IconFontC, "FaBus")
        .primitive("terminal", Backend::IconFontC, "FaMapMarkerAlt")
}

/// On-board amenities shown on trip cards
pub fn amenities() -> ContextDefinition {
    ContextDefinition::new("amenities").primitives(
        Backend::IconFontB,
        [
            ("luggage", "MdLuggage"),
            ("accessible", "MdAccessible"),
            ("wifi", "MdWifi"),
            ("air-conditioning", "MdAcUnit"),
            ("power", "MdPower"),
            ("parking", "MdLocalParking"),
        ],
    )
}

/// Booking and payment flow
pub fn booking() -> ContextDefinition {
    ContextDefinition::new("booking")
        .primitives(
            Backend::IconFontD,
            [
                ("ticket", "HiOutlineTicket"),
                ("vehicle", "HiOutlineTruck"),
                ("itinerary", "HiOutlineMap"),
                ("payment", "HiOutlineCurrencyDollar"),
                ("manifest", "HiOutlineClipboardList"),
                ("statistics", "HiOutlineChartBar"),
                ("preferences", "HiOutlineCog"),
            ],
        )
        .primitives(
            Backend::IconFontC,
            [
                ("qr-code", "FaQrcode"),
                ("invoice", "FaFileInvoice"),
                ("cash", "FaMoneyBillWave"),
            ],
        )
        .primitive("card", Backend::IconFontA, "CreditCardOutlined")
}

/// Generic interface chrome
pub fn user_interface() -> ContextDefinition {
    ContextDefinition::new("user-interface").primitives(
        Backend::IconFontA,
        [
            ("close", "CloseOutlined"),
            ("calendar", "CalendarOutlined"),
            ("notification", "BellOutlined"),
            ("more", "MoreOutlined"),
            ("expand", "DownOutlined"),
            ("collapse", "UpOutlined"),
            ("help", "QuestionCircleOutlined"),
            ("contact", "PhoneOutlined"),
            ("email", "MailOutlined"),
            ("location", "EnvironmentOutlined"),
            ("team", "TeamOutlined"),
        ],
    )
}

/// Purely ornamental icons
pub fn decoration() -> ContextDefinition {
    ContextDefinition::new("decoration")
        .primitives(
            Backend::IconFontA,
            [
                ("placeholder", "BorderOutlined"),
                ("star", "StarOutlined"),
                ("favorite", "HeartOutlined"),
                ("smile", "SmileOutlined"),
            ],
        )
        .primitive("rating", Backend::IconFontB, "MdStarBorder")
        .primitive("backdrop", Backend::IconFontB, "MdBlurOn")
        .primitive("featured", Backend::IconFontC, "FaRegStar")
        .primitive("sparkle", Backend::IconFontD, "HiOutlineSparkles")
}

/// Every icon context in documentation order
pub fn all() -> Vec<ContextDefinition> {
    vec![
        authentication(),
        crud_actions(),
        status(),
        navigation(),
        transport(),
        amenities(),
        booking(),
        user_interface(),
        decoration(),
    ]
}

/// Add every icon context
pub fn install(builder: EngineBuilder) -> EngineBuilder {
    all().into_iter().fold(builder, |builder, context| builder.context(context))
}
