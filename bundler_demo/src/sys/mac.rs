// system icons shipped inside CoreTypes.bundle
pub const ICON_WARNING: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/AlertCautionIcon.icns";
pub const ICON_ERROR: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/AlertStopIcon.icns";
