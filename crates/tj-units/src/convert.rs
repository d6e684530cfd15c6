//! Named one-way conversions.
//!
//! Factors use the exact international definitions (1 ft = 0.3048 m,
//! 1 lbm = 0.45359237 kg, 1 lbf = 4.4482216152605 N).

pub const FT_PER_M: f64 = 1.0 / M_PER_FT;
pub const M_PER_FT: f64 = 0.3048;
pub const KG_PER_LBM: f64 = 0.453_592_37;
pub const N_PER_LBF: f64 = 4.448_221_615_260_5;
pub const PA_PER_PSIA: f64 = N_PER_LBF / (0.0254 * 0.0254);
pub const PA_PER_PSF: f64 = N_PER_LBF / (M_PER_FT * M_PER_FT);
pub const J_PER_BTU: f64 = 1_055.055_852_62;
pub const KPA_PER_ATM: f64 = 101.325;
pub const KG_PER_M3_PER_SLUG_PER_FT3: f64 = 515.378_818;

pub fn c_to_k(c: f64) -> f64 {
    c + 273.15
}

pub fn k_to_c(k: f64) -> f64 {
    k - 273.15
}

pub fn f_to_k(f: f64) -> f64 {
    (f + 459.67) * 5.0 / 9.0
}

pub fn r_to_k(r: f64) -> f64 {
    r * 5.0 / 9.0
}

pub fn k_to_r(k: f64) -> f64 {
    k * 9.0 / 5.0
}

pub fn pa_to_kpa(pa: f64) -> f64 {
    pa / 1000.0
}

pub fn atm_to_kpa(atm: f64) -> f64 {
    atm * KPA_PER_ATM
}

pub fn psia_to_pa(psia: f64) -> f64 {
    psia * PA_PER_PSIA
}

pub fn pa_to_psia(pa: f64) -> f64 {
    pa / PA_PER_PSIA
}

pub fn psf_to_pa(psf: f64) -> f64 {
    psf * PA_PER_PSF
}

pub fn n_to_lbf(n: f64) -> f64 {
    n / N_PER_LBF
}

pub fn lbf_to_n(lbf: f64) -> f64 {
    lbf * N_PER_LBF
}

pub fn btu_to_j(btu: f64) -> f64 {
    btu * J_PER_BTU
}

pub fn j_to_btu(j: f64) -> f64 {
    j / J_PER_BTU
}

pub fn btu_per_lbm_to_j_per_kg(v: f64) -> f64 {
    btu_to_j(v) / KG_PER_LBM
}

pub fn lbhr_to_kgs(lbhr: f64) -> f64 {
    lbhr * KG_PER_LBM / 3600.0
}

pub fn kgs_to_lbhr(kgs: f64) -> f64 {
    kgs / KG_PER_LBM * 3600.0
}

pub fn meters_to_km(m: f64) -> f64 {
    m / 1000.0
}

pub fn km_to_meters(km: f64) -> f64 {
    km * 1000.0
}

pub fn meters_to_feet(m: f64) -> f64 {
    m * FT_PER_M
}

pub fn feet_to_meters(ft: f64) -> f64 {
    ft * M_PER_FT
}

pub fn feet_to_km(ft: f64) -> f64 {
    meters_to_km(feet_to_meters(ft))
}

pub fn km_to_feet(km: f64) -> f64 {
    meters_to_feet(km_to_meters(km))
}

pub fn psf_to_kpa(psf: f64) -> f64 {
    pa_to_kpa(psf_to_pa(psf))
}

pub fn slug_per_ft3_to_kg_per_m3(v: f64) -> f64 {
    v * KG_PER_M3_PER_SLUG_PER_FT3
}

pub fn fps_to_mps(v: f64) -> f64 {
    feet_to_meters(v)
}

/// Thrust-specific fuel consumption, kg/(N·s) → lbm/(lbf·hr).
pub fn tsfc_si_to_imperial(kg_per_n_s: f64) -> f64 {
    kg_per_n_s / KG_PER_LBM * N_PER_LBF * 3600.0
}
