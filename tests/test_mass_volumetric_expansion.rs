use pflow::{
    Dictator, MassVolumetricExpansion, NodalMaxValue, NodalReduction, ParamDictator,
    ParamMassVolumetricExpansion, ParamPorousFlow, PropertiesSnapshot, ShapeData, StrError,
};
use russell_lab::approx_eq;

// Emulates the host framework: reads the parameters back from a JSON file,
// allocates the dictator and the kernel, loops over a handful of nodes
// evaluating residuals, and reduces the nodal values on two partitions the
// way a threaded host would.
#[test]
fn test_mass_volumetric_expansion() -> Result<(), StrError> {
    // parameters (round-tripped through a JSON file)
    let param = ParamPorousFlow {
        dictator: ParamDictator {
            n_phases: 2,
            n_components: 2,
            variables: vec![0, 1],
        },
        mass_volumetric_expansion: ParamMassVolumetricExpansion { fluid_component: 0 },
    };
    let full_path = "/tmp/pflow/test_mass_volumetric_expansion.json";
    param.write_json(full_path)?;
    let param = ParamPorousFlow::read_json(full_path)?;

    // dictator and kernel
    let dictator = Dictator::new(&param.dictator)?;
    let kernel = MassVolumetricExpansion::new(&param.mass_volumetric_expansion, 0, &dictator)?;

    // shape data (single evaluation point per node, unit test function)
    let mut shape = ShapeData::new(2);
    shape.test = 1.0;

    // properties at four nodes; only the strain rate varies
    let strain_rates = [0.5, -0.25, 1.25, 0.75];
    let mut residuals = Vec::new();
    for rate in strain_rates {
        let mut props = PropertiesSnapshot::new(2, 2, 2, 2);
        props.density = vec![2.0, 1.5];
        props.saturation = vec![0.4, 0.6];
        props.mass_frac = vec![vec![0.8, 0.2], vec![0.3, 0.7]];
        props.porosity = 0.3;
        props.strain_rate = rate;
        residuals.push(kernel.residual(&shape, &props)?);
    }

    // mass = 2·0.4·0.8 + 1.5·0.6·0.3 = 0.91; residual = mass·0.3·rate
    approx_eq(residuals[2], 0.91 * 0.3 * 1.25, 1e-14);

    // reduce the nodal values on two partitions, then join
    let mut first = NodalMaxValue::new();
    let mut second = NodalMaxValue::new();
    first.initialize();
    second.initialize();
    for (node, res) in residuals.iter().enumerate() {
        if node < 2 {
            first.execute(node, *res);
        } else {
            second.execute(node, *res);
        }
    }
    first.join(&second);
    approx_eq(first.value(), 0.91 * 0.3 * 1.25, 1e-14);
    assert_eq!(first.node(), Some(2));
    Ok(())
}
