//! A complete run output shared by the unit tests.

use crate::resolver::ScanTable;

/// A large single-null tokamak: every standard build segment, flags, TF arc
/// points, winding pack, cryostat and five PF coils plus the solenoid.
pub(crate) fn reference_run() -> ScanTable {
    let mut table: ScanTable = [
        // radial build
        ("bore", 2.0),
        ("ohcth", 0.8),
        ("precomp", 0.05),
        ("gapoh", 0.05),
        ("tfcth", 1.2),
        ("tftsgap", 0.05),
        ("thshield_ib", 0.05),
        ("gapds", 0.02),
        ("d_vv_in", 0.3),
        ("shldith", 0.3),
        ("vvblgap", 0.02),
        ("blnkith", 0.75),
        ("fwith", 0.02),
        ("scrapli", 0.25),
        ("rminor", 2.9),
        ("scraplo", 0.25),
        ("fwoth", 0.02),
        ("blnkoth", 1.0),
        ("shldoth", 0.8),
        ("d_vv_out", 0.3),
        ("gapsto", 0.6),
        ("thshield_ob", 0.05),
        ("tfthko", 1.2),
        // vertical build
        ("rminor*kappa", 4.785),
        ("vgaptop", 0.6),
        ("fwtth", 0.02),
        ("blnktth", 0.85),
        ("shldtth", 0.6),
        ("d_vv_top", 0.3),
        ("vgap2", 0.05),
        ("thshield_vb", 0.05),
        ("vgap", 1.6),
        ("divfix", 0.62),
        ("shldlth", 0.7),
        ("d_vv_bot", 0.3),
        // plasma
        ("rmajor", 8.76),
        ("triang", 0.5),
        ("triang95", 0.333),
        ("kappa95", 1.65),
        // flags
        ("i_single_null", 1.0),
        ("iefrf", 10.0),
        ("i_tf_shape", 1.0),
        ("i_tf_sup", 1.0),
        ("i_tf_turns_integer", 0.0),
        ("iohcl", 1.0),
        // TF coils
        ("n_tf", 16.0),
        ("thkcas", 0.5),
        ("casthi", 0.06),
        ("tinstf", 0.008),
        ("dr_tf_wp", 0.6),
        ("wwp1", 1.2),
        ("wwp2", 0.9),
        ("nbshield", 0.1),
        ("beamwd", 0.58),
        ("rtanbeam", 8.0),
        // cryostat
        ("rdewex", 17.0),
        ("zdewex", 15.0),
        ("ddwex", 0.15),
        ("ohdz", 16.0),
    ]
    .into_iter()
    .collect();

    let arc = [
        (4.1, 4.5),
        (9.0, 7.325),
        (14.75, 0.0),
        (9.0, -8.155),
        (4.1, -4.5),
    ];
    for (i, (x, y)) in arc.into_iter().enumerate() {
        table.insert(format!("xarc({})", i + 1), x);
        table.insert(format!("yarc({})", i + 1), y);
    }

    // the last entry is the central solenoid
    let coils = [
        (6.0, 9.0, 1.2, 1.2),
        (12.0, 8.0, 1.0, 1.0),
        (16.0, 4.0, 0.8, 0.8),
        (16.0, -4.0, 0.8, 0.8),
        (12.0, -8.0, 1.0, 1.0),
        (2.4, 0.0, 0.8, 16.0),
    ];
    for (i, (r, z, dr, dz)) in coils.into_iter().enumerate() {
        table.insert(format!("rpf[{i}]"), r);
        table.insert(format!("zpf[{i}]"), z);
        table.insert(format!("pfdr[{i}]"), dr);
        table.insert(format!("pfdz[{i}]"), dz);
    }
    table
}
