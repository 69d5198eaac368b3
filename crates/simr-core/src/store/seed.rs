//! Static example works served when no real data is available

use crate::Work;

/// The two example works returned by a fresh local store, and by the remote
/// store when the works collection cannot be read.
pub fn seed_works() -> Vec<Work> {
    vec![
        Work::new(
            "TRB-001",
            "Encefalitis Autoinmune: Serie de casos en INCN",
            "Dr. Juan Pérez (R2)",
            "Trabajo Original",
            "Neurología",
            "Aceptado",
        ),
        Work::new(
            "TRB-002",
            "Moya Moya en paciente pediátrico",
            "Dra. Maria Lopez (R1)",
            "Reporte de Caso",
            "Neuropediatría",
            "En Evaluación",
        ),
    ]
}
