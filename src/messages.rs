//! Feedback text, keyed by rubric area
//!
//! Templates use the `%d` / `%f` / `%s` specifiers understood by
//! [`crate::core::format::format`].

pub struct Summary {
    pub score: &'static str,
    pub cutout: &'static str,
}

pub struct ConstraintText {
    pub radius_low: &'static str,
    pub radius_obj: &'static str,
    pub payload_low: &'static str,
    pub payload_obj: &'static str,
    pub takeoff_high: &'static str,
    pub takeoff_obj: &'static str,
    pub landing_high: &'static str,
    pub landing_obj: &'static str,
    pub mach_eq: &'static str,
    pub mach_min: &'static str,
    pub mach_obj: &'static str,
    pub alt_eq: &'static str,
    pub n_eq: &'static str,
    pub n_min: &'static str,
    pub n_obj: &'static str,
    pub ab_eq: &'static str,
    pub ps_eq: &'static str,
    pub ps_min: &'static str,
    pub ps_obj: &'static str,
    pub cdx_eq: &'static str,
    pub summary: &'static str,
    pub landing_curve: &'static str,
    pub curve_failure: &'static str,
    pub curve_suffix_many: &'static str,
    pub curve_suffix_few: &'static str,
    pub curve_error: &'static str,
}

pub struct AttachmentText {
    pub pcs_x: &'static str,
    pub vt_x: &'static str,
    pub pcs_z: &'static str,
    pub vt_y: &'static str,
    pub strake: &'static str,
    pub fuselage: &'static str,
    pub deduction: &'static str,
}

pub struct StabilityText {
    pub sm: &'static str,
    pub sm_warn: &'static str,
    pub clb: &'static str,
    pub cnb: &'static str,
    pub ratio: &'static str,
    pub deduction: &'static str,
}

pub struct FuelText {
    pub shortage: &'static str,
    pub volume: &'static str,
}

pub struct CostText {
    pub over_187: &'static str,
    pub obj_187: &'static str,
    pub over_800: &'static str,
    pub obj_800: &'static str,
    pub invalid: &'static str,
}

pub struct GearText {
    pub nose: &'static str,
    pub tipback: &'static str,
    pub rollover: &'static str,
    pub rotation: &'static str,
    pub rotation_order: &'static str,
    pub takeoff_speed: &'static str,
    pub rotation_missing: &'static str,
    pub deduction: &'static str,
}

pub struct Strings {
    pub summary: Summary,
    pub aero_mismatch: &'static str,
    pub mission_legs: [&'static str; 11],
    pub mission_summary: &'static str,
    pub thrust_leg: &'static str,
    pub takeoff_roll: &'static str,
    pub constraint: ConstraintText,
    pub attachment: AttachmentText,
    pub stability: StabilityText,
    pub fuel: FuelText,
    pub cost: CostText,
    pub gear: GearText,
}

pub static STRINGS: Strings = Strings {
    summary: Summary {
        score: "Score: %d/10",
        cutout: "Remember to submit your aircraft cutout drawing separately; it is graded outside this tool.",
    },
    aero_mismatch: "-%d: Aero tab values still match the template. Update the drag polar and lift curve inputs for your design.",
    mission_legs: [
        "Mission leg 1 (takeoff) should start at 0 ft altitude with 100% afterburner.",
        "Mission leg 2 (accelerate/climb) altitude should fall between legs 1 and 3.",
        "Mission leg 2 (accelerate/climb) mach should fall between legs 1 and 3.",
        "Mission leg 2 (accelerate/climb) should not use afterburner.",
        "Mission leg 3 (subsonic cruise out) should be at or above 35,000 ft, mach 0.9, no afterburner.",
        "Mission leg 4 (subsonic cruise out) should be at or above 35,000 ft, mach 0.9, no afterburner.",
        "Mission leg 5 (supercruise out) should be at or above 35,000 ft at the constraint table cruise mach, no afterburner, covering at least 150 nm.",
        "Mission leg 6 (combat) should be at or above 30,000 ft, mach 1.2 or faster, 100% afterburner, for at least 2 minutes.",
        "Mission leg 7 (supercruise back) should be at or above 35,000 ft at the constraint table cruise mach, no afterburner, covering at least 150 nm.",
        "Mission leg 8 (subsonic cruise back) should be at or above 35,000 ft, mach 0.9, no afterburner.",
        "Mission leg 9 (loiter) should be at 10,000 ft, mach 0.4, no afterburner, for 20 minutes.",
    ],
    mission_summary: "Mission profile does not match the RFP. No points deducted, but your performance numbers may be wrong.",
    thrust_leg: "-1: Drag exceeds available thrust on at least one mission leg (Miss tab rows 48-49).",
    takeoff_roll: "-1: Computed takeoff distance is longer than the required takeoff distance.",
    constraint: ConstraintText {
        radius_low: "Mission radius %.0f nm is below the 375 nm threshold.",
        radius_obj: "Mission radius %.0f nm meets the 410 nm objective.",
        payload_low: "AIM-120 count %d is below the required 8.",
        payload_obj: "Payload of %d AIM-120 and %d AIM-9 meets the objective.",
        takeoff_high: "Takeoff distance %.0f ft exceeds the 3000 ft threshold.",
        takeoff_obj: "Takeoff distance %.0f ft meets the 2500 ft objective.",
        landing_high: "Landing distance %.0f ft exceeds the 5000 ft threshold.",
        landing_obj: "Landing distance %.0f ft meets the 3500 ft objective.",
        mach_eq: "%s: mach %.2f should be %.2f.",
        mach_min: "%s: mach %.2f is below the %.2f threshold.",
        mach_obj: "%s: meets the mach %.2f objective (%.2f).",
        alt_eq: "%s: altitude %d ft should be %d ft.",
        n_eq: "%s: load factor %.1f should be %.1f.",
        n_min: "%s: load factor %.1f is below the %.1f threshold.",
        n_obj: "%s: meets the %.1f g objective (%.1f).",
        ab_eq: "%s: afterburner setting %d%% should be %d%%.",
        ps_eq: "%s: Ps %d ft/s should be %d ft/s.",
        ps_min: "%s: Ps %d ft/s is below the %d ft/s threshold.",
        ps_obj: "%s: meets the %d ft/s Ps objective (%d).",
        cdx_eq: "%s: CDx %.3f should be %.3f.",
        summary: "-1: Constraint table does not match the RFP requirements.",
        landing_curve: "Design wing loading %.1f psf exceeds the landing limit of %.1f psf.",
        curve_failure: "Design point falls below the constraint curve%s for: %s.",
        curve_suffix_many: " Your design does not close; revisit wing loading and thrust-to-weight.",
        curve_suffix_few: " Move the design point above every active constraint curve.",
        curve_error: "Constraint curve skipped: %s",
    },
    attachment: AttachmentText {
        pcs_x: "Pitch control surface sits too far aft: more than 75% of its root chord hangs off the fuselage.",
        vt_x: "Vertical tail sits too far aft: more than 75% of its root chord hangs off the fuselage.",
        pcs_z: "Pitch control surface vertical position is outside the fuselage height.",
        vt_y: "Vertical tail lateral position is outside the fuselage width.",
        strake: "Strake does not reach the wing leading edge.",
        fuselage: "-1: A component is positioned behind the end of the %.1f ft fuselage.",
        deduction: "-1: One or more surfaces are not attached to the aircraft.",
    },
    stability: StabilityText {
        sm: "Static margin must be between -0.10 and 0.11.",
        sm_warn: "Static margin is negative; the aircraft is relaxed-stability and needs a flight control system.",
        clb: "Cl-beta must be below -0.001 for lateral stability.",
        cnb: "Cn-beta must be above 0.002 for directional stability.",
        ratio: "Cn-beta/Cl-beta ratio must be between -1 and -0.3.",
        deduction: "-1: Stability requirements not met.",
    },
    fuel: FuelText {
        shortage: "-1: Fuel available (%.0f lb) is less than fuel required (%.0f lb).",
        volume: "-1: Remaining internal volume (%.1f ft^3) must be positive.",
    },
    cost: CostText {
        over_187: "-1: Recurring cost $%.1fM exceeds the $115M threshold for a 187 aircraft buy.",
        obj_187: "Recurring cost $%.1fM meets the $100M objective for a 187 aircraft buy.",
        over_800: "-1: Recurring cost $%.1fM exceeds the $75M threshold for an 800 aircraft buy.",
        obj_800: "Recurring cost $%.1fM meets the $63M objective for an 800 aircraft buy.",
        invalid: "-1: Number of aircraft (%s) must be 187 or 800.",
    },
    gear: GearText {
        nose: "Nose gear carries %.1f%% of the weight; it should carry between 9.5% and 20%.",
        tipback: "Tip-back angle %.1f deg must be less than %.1f deg or the aircraft will sit on its tail.",
        rollover: "Rollover angle %.1f deg must be less than %.1f deg or the aircraft will roll over.",
        rotation: "Rotation speed %.0f kts must be below 200 kts.",
        rotation_order: "Rotation speed %.0f kts must be below the takeoff speed of %.0f kts.",
        takeoff_speed: "Takeoff speed %.0f kts must be below 200 kts.",
        rotation_missing: "Rotation and takeoff speeds are missing from the Gear tab.",
        deduction: "-1: Landing gear requirements not met.",
    },
};
