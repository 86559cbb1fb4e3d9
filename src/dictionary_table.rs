use crate::model::Vr;

/// Standard data elements as `(tag, vr, name)`, sorted by tag.
pub const STANDARD_ELEMENTS: &[(u32, Vr, &str)] = &[
    (0x00020002, Vr::UI, "Media Storage SOP Class UID"),
    (0x00020003, Vr::UI, "Media Storage SOP Instance UID"),
    (0x00020010, Vr::UI, "Transfer Syntax UID"),
    (0x00020012, Vr::UI, "Implementation Class UID"),
    (0x00020013, Vr::SH, "Implementation Version Name"),
    (0x00020016, Vr::AE, "Source Application Entity Title"),
    (0x00080005, Vr::CS, "Specific Character Set"),
    (0x00080008, Vr::CS, "Image Type"),
    (0x00080010, Vr::CS, "Recognition Code"),
    (0x00080012, Vr::DA, "Instance Creation Date"),
    (0x00080013, Vr::TM, "Instance Creation Time"),
    (0x00080014, Vr::UI, "Instance Creator UID"),
    (0x00080016, Vr::UI, "SOP Class UID"),
    (0x00080018, Vr::UI, "SOP Instance UID"),
    (0x00080020, Vr::DA, "Study Date"),
    (0x00080021, Vr::DA, "Series Date"),
    (0x00080022, Vr::DA, "Acquisition Date"),
    (0x00080023, Vr::DA, "Content Date"),
    (0x00080024, Vr::DA, "Overlay Date"),
    (0x00080025, Vr::DA, "Curve Date"),
    (0x00080030, Vr::TM, "Study Time"),
    (0x00080031, Vr::TM, "Series Time"),
    (0x00080032, Vr::TM, "Acquisition Time"),
    (0x00080033, Vr::TM, "Content Time"),
    (0x00080034, Vr::TM, "Overlay Time"),
    (0x00080035, Vr::TM, "Curve Time"),
    (0x00080040, Vr::US, "Data Set Type"),
    (0x00080041, Vr::LO, "Data Set Subtype"),
    (0x00080042, Vr::CS, "Nuclear Medicine Series Type"),
    (0x00080050, Vr::SH, "Accession Number"),
    (0x00080052, Vr::CS, "Query/Retrieve Level"),
    (0x00080054, Vr::AE, "Retrieve AE Title"),
    (0x00080058, Vr::AE, "Failed SOP Instance UID List"),
    (0x00080060, Vr::CS, "Modality"),
    (0x00080064, Vr::CS, "Conversion Type"),
    (0x00080068, Vr::CS, "Presentation Intent Type"),
    (0x00080070, Vr::LO, "Manufacturer"),
    (0x00080080, Vr::LO, "Institution Name"),
    (0x00080081, Vr::ST, "Institution Address"),
    (0x00080082, Vr::SQ, "Institution Code Sequence"),
    (0x00080090, Vr::PN, "Referring Physician's Name"),
    (0x00080092, Vr::ST, "Referring Physician's Address"),
    (0x00080094, Vr::SH, "Referring Physician's Telephone Numbers"),
    (0x00080096, Vr::SQ, "Referring Physician Identification Sequence"),
    (0x00080100, Vr::SH, "Code Value"),
    (0x00080102, Vr::SH, "Coding Scheme Designator"),
    (0x00080103, Vr::SH, "Coding Scheme Version"),
    (0x00080104, Vr::LO, "Code Meaning"),
    (0x00080201, Vr::SH, "Timezone Offset From UTC"),
    (0x00081010, Vr::SH, "Station Name"),
    (0x00081030, Vr::LO, "Study Description"),
    (0x00081032, Vr::SQ, "Procedure Code Sequence"),
    (0x0008103E, Vr::LO, "Series Description"),
    (0x00081040, Vr::LO, "Institutional Department Name"),
    (0x00081048, Vr::PN, "Physician(s) of Record"),
    (0x00081050, Vr::PN, "Performing Physician's Name"),
    (0x00081060, Vr::PN, "Name of Physician(s) Reading Study"),
    (0x00081070, Vr::PN, "Operator's Name"),
    (0x00081080, Vr::LO, "Admitting Diagnoses Description"),
    (0x00081084, Vr::SQ, "Admitting Diagnoses Code Sequence"),
    (0x00081090, Vr::LO, "Manufacturer's Model Name"),
    (0x00081100, Vr::SQ, "Referenced Results Sequence"),
    (0x00081110, Vr::SQ, "Referenced Study Sequence"),
    (0x00081111, Vr::SQ, "Referenced Performed Procedure Step Sequence"),
    (0x00081115, Vr::SQ, "Referenced Series Sequence"),
    (0x00081120, Vr::SQ, "Referenced Patient Sequence"),
    (0x00081125, Vr::SQ, "Referenced Visit Sequence"),
    (0x00081130, Vr::SQ, "Referenced Overlay Sequence"),
    (0x00081140, Vr::SQ, "Referenced Image Sequence"),
    (0x00081145, Vr::SQ, "Referenced Curve Sequence"),
    (0x00081150, Vr::UI, "Referenced SOP Class UID"),
    (0x00081155, Vr::UI, "Referenced SOP Instance UID"),
    (0x00082111, Vr::ST, "Derivation Description"),
    (0x00082112, Vr::SQ, "Source Image Sequence"),
    (0x00082120, Vr::SH, "Stage Name"),
    (0x00082122, Vr::IS, "Stage Number"),
    (0x00082124, Vr::IS, "Number of Stages"),
    (0x00082128, Vr::IS, "View Number"),
    (0x00082129, Vr::IS, "Number of Event Timers"),
    (0x0008212A, Vr::IS, "Number of Views in Stage"),
    (0x00082130, Vr::DS, "Event Elapsed Time(s)"),
    (0x00082132, Vr::LO, "Event Timer Name(s)"),
    (0x00082142, Vr::IS, "Start Trim"),
    (0x00082143, Vr::IS, "Stop Trim"),
    (0x00082144, Vr::IS, "Recommended Display Frame Rate"),
    (0x00082200, Vr::CS, "Transducer Position"),
    (0x00082204, Vr::CS, "Transducer Orientation"),
    (0x00082208, Vr::CS, "Anatomic Structure"),
    (0x00100010, Vr::PN, "Patient's Name"),
    (0x00100020, Vr::LO, "Patient ID"),
    (0x00100021, Vr::LO, "Issuer of Patient ID"),
    (0x00100022, Vr::CS, "Type of Patient ID"),
    (0x00100030, Vr::DA, "Patient's Birth Date"),
    (0x00100032, Vr::TM, "Patient's Birth Time"),
    (0x00100040, Vr::CS, "Patient's Sex"),
    (0x00100050, Vr::SQ, "Patient's Insurance Plan Code Sequence"),
    (0x00100101, Vr::SQ, "Patient's Primary Language Code Sequence"),
    (0x00100102, Vr::SQ, "Patient's Primary Language Modifier Code Sequence"),
    (0x00101000, Vr::LO, "Other Patient I Ds"),
    (0x00101001, Vr::PN, "Other Patient Names"),
    (0x00101005, Vr::PN, "Patient's Birth Name"),
    (0x00101010, Vr::AS, "Patient's Age"),
    (0x00101020, Vr::DS, "Patient's Size"),
    (0x00101030, Vr::DS, "Patient's Weight"),
    (0x00101040, Vr::LO, "Patient's Address"),
    (0x00101050, Vr::LO, "Insurance Plan Identification"),
    (0x00102000, Vr::LO, "Medical Alerts"),
    (0x00102110, Vr::LO, "Allergies"),
    (0x00102150, Vr::LO, "Country of Residence"),
    (0x00102152, Vr::LO, "Region of Residence"),
    (0x00102154, Vr::SH, "Patient's Telephone Numbers"),
    (0x00102160, Vr::SH, "Ethnic Group"),
    (0x00102180, Vr::SH, "Occupation"),
    (0x001021A0, Vr::CS, "Smoking Status"),
    (0x001021B0, Vr::LT, "Additional Patient History"),
    (0x00102201, Vr::LO, "Patient Species Description"),
    (0x00102203, Vr::CS, "Patient Sex Neutered"),
    (0x00102292, Vr::LO, "Patient Breed Description"),
    (0x00102297, Vr::PN, "Responsible Person"),
    (0x00102298, Vr::CS, "Responsible Person Role"),
    (0x00102299, Vr::CS, "Responsible Organization"),
    (0x00104000, Vr::LT, "Patient Comments"),
    (0x00180010, Vr::LO, "Contrast/Bolus Agent"),
    (0x00180015, Vr::CS, "Body Part Examined"),
    (0x00180020, Vr::CS, "Scanning Sequence"),
    (0x00180021, Vr::CS, "Sequence Variant"),
    (0x00180022, Vr::CS, "Scan Options"),
    (0x00180023, Vr::CS, "MR Acquisition Type"),
    (0x00180024, Vr::SH, "Sequence Name"),
    (0x00180025, Vr::CS, "Angio Flag"),
    (0x00180030, Vr::LO, "Radionuclide"),
    (0x00180031, Vr::LO, "Radiopharmaceutical"),
    (0x00180032, Vr::DS, "Energy Window Centerline"),
    (0x00180033, Vr::DS, "Energy Window Total Width"),
    (0x00180034, Vr::LO, "Intervention Drug Name"),
    (0x00180035, Vr::TM, "Intervention Drug Start Time"),
    (0x00180040, Vr::IS, "Cine Rate"),
    (0x00180050, Vr::DS, "Slice Thickness"),
    (0x00180060, Vr::DS, "KVP"),
    (0x00180070, Vr::IS, "Counts Accumulated"),
    (0x00180071, Vr::CS, "Acquisition Termination Condition"),
    (0x00180072, Vr::DS, "Effective Duration"),
    (0x00180073, Vr::CS, "Acquisition Start Condition"),
    (0x00180074, Vr::IS, "Acquisition Start Condition Data"),
    (0x00180075, Vr::IS, "Acquisition Termination Condition Data"),
    (0x00180080, Vr::DS, "Repetition Time"),
    (0x00180081, Vr::DS, "Echo Time"),
    (0x00180082, Vr::DS, "Inversion Time"),
    (0x00180083, Vr::DS, "Number of Averages"),
    (0x00180084, Vr::DS, "Imaging Frequency"),
    (0x00180085, Vr::SH, "Imaged Nucleus"),
    (0x00180086, Vr::IS, "Echo Numbers(s)"),
    (0x00180087, Vr::DS, "Magnetic Field Strength"),
    (0x00180088, Vr::DS, "Spacing Between Slices"),
    (0x00180089, Vr::IS, "Number of Phase Encoding Steps"),
    (0x00180090, Vr::DS, "Data Collection Diameter"),
    (0x00180091, Vr::IS, "Echo Train Length"),
    (0x00180093, Vr::DS, "Percent Sampling"),
    (0x00180094, Vr::DS, "Percent Phase Field of View"),
    (0x00180095, Vr::DS, "Pixel Bandwidth"),
    (0x00181000, Vr::LO, "Device Serial Number"),
    (0x00181004, Vr::LO, "Plate ID"),
    (0x00181010, Vr::LO, "Secondary Capture Device ID"),
    (0x00181012, Vr::DA, "Date of Secondary Capture"),
    (0x00181014, Vr::TM, "Time of Secondary Capture"),
    (0x00181016, Vr::LO, "Secondary Capture Device Manufacturer"),
    (0x00181018, Vr::LO, "Secondary Capture Device Manufacturer's Model Name"),
    (0x00181019, Vr::LO, "Secondary Capture Device Software Versions"),
    (0x00181020, Vr::LO, "Software Versions(s)"),
    (0x00181022, Vr::SH, "Video Image Format Acquired"),
    (0x00181023, Vr::LO, "Digital Image Format Acquired"),
    (0x00181030, Vr::LO, "Protocol Name"),
    (0x00181040, Vr::LO, "Contrast/Bolus Route"),
    (0x00181041, Vr::DS, "Contrast/Bolus Volume"),
    (0x00181042, Vr::TM, "Contrast/Bolus Start Time"),
    (0x00181043, Vr::TM, "Contrast/Bolus Stop Time"),
    (0x00181044, Vr::DS, "Contrast/Bolus Total Dose"),
    (0x00181045, Vr::IS, "Syringe Counts"),
    (0x00181050, Vr::DS, "Spatial Resolution"),
    (0x00181060, Vr::DS, "Trigger Time"),
    (0x00181061, Vr::LO, "Trigger Sourceor Type"),
    (0x00181062, Vr::IS, "Nominal Interval"),
    (0x00181063, Vr::DS, "Frame Time"),
    (0x00181064, Vr::LO, "Cardiac Framing Type"),
    (0x00181065, Vr::DS, "Frame Time Vector"),
    (0x00181066, Vr::DS, "Frame Delay"),
    (0x00181070, Vr::LO, "Radiopharmaceutical Route"),
    (0x00181071, Vr::DS, "Radiopharmaceutical Volume"),
    (0x00181072, Vr::TM, "Radiopharmaceutical Start Time"),
    (0x00181073, Vr::TM, "Radiopharmaceutical Stop Time"),
    (0x00181074, Vr::DS, "Radionuclide Total Dose"),
    (0x00181075, Vr::DS, "Radionuclide Half Life"),
    (0x00181076, Vr::DS, "Radionuclide Positron Fraction"),
    (0x00181080, Vr::CS, "Beat Rejection Flag"),
    (0x00181081, Vr::IS, "Low R-R Value"),
    (0x00181082, Vr::IS, "High R-R Value"),
    (0x00181083, Vr::IS, "Intervals Acquired"),
    (0x00181084, Vr::IS, "Intervals Rejected"),
    (0x00181085, Vr::LO, "PVC Rejection"),
    (0x00181086, Vr::IS, "Skip Beats"),
    (0x00181088, Vr::IS, "Heart Rate"),
    (0x00181090, Vr::IS, "Cardiac Number of Images"),
    (0x00181094, Vr::IS, "Trigger Window"),
    (0x00181100, Vr::DS, "Reconstruction Diameter"),
    (0x00181110, Vr::DS, "Distance Source to Detector"),
    (0x00181111, Vr::DS, "Distance Source to Patient"),
    (0x00181120, Vr::DS, "Gantry/Detector Tilt"),
    (0x00181130, Vr::DS, "Table Height"),
    (0x00181131, Vr::DS, "Table Traverse"),
    (0x00181140, Vr::CS, "Rotation Direction"),
    (0x00181141, Vr::DS, "Angular Position"),
    (0x00181142, Vr::DS, "Radial Position"),
    (0x00181143, Vr::DS, "Scan Arc"),
    (0x00181144, Vr::DS, "Angular Step"),
    (0x00181145, Vr::DS, "Center of Rotation Offset"),
    (0x00181146, Vr::DS, "Rotation Offset"),
    (0x00181147, Vr::CS, "Field of View Shape"),
    (0x00181149, Vr::IS, "Field of View Dimensions(s)"),
    (0x00181150, Vr::IS, "Exposure Time"),
    (0x00181151, Vr::IS, "X-ray Tube Current"),
    (0x00181152, Vr::IS, "Exposure"),
    (0x00181153, Vr::IS, "Exposureinu As"),
    (0x00181154, Vr::DS, "Average Pulse Width"),
    (0x00181155, Vr::CS, "Radiation Setting"),
    (0x00181156, Vr::CS, "Rectification Type"),
    (0x0018115A, Vr::CS, "Radiation Mode"),
    (0x0018115E, Vr::DS, "Image and Fluoroscopy Area Dose Product"),
    (0x00181160, Vr::SH, "Filter Type"),
    (0x00181161, Vr::LO, "Type of Filters"),
    (0x00181162, Vr::DS, "Intensifier Size"),
    (0x00181164, Vr::DS, "Imager Pixel Spacing"),
    (0x00181166, Vr::CS, "Grid"),
    (0x00181170, Vr::IS, "Generator Power"),
    (0x00181180, Vr::SH, "Collimator/grid Name"),
    (0x00181181, Vr::CS, "Collimator Type"),
    (0x00181182, Vr::IS, "Focal Distance"),
    (0x00181183, Vr::DS, "X Focus Center"),
    (0x00181184, Vr::DS, "Y Focus Center"),
    (0x00181190, Vr::DS, "Focal Spot(s)"),
    (0x00181191, Vr::CS, "Anode Target Material"),
    (0x001811A0, Vr::DS, "Body Part Thickness"),
    (0x001811A2, Vr::DS, "Compression Force"),
    (0x00181200, Vr::DA, "Date of Last Calibration"),
    (0x00181201, Vr::TM, "Time of Last Calibration"),
    (0x00181210, Vr::SH, "Convolution Kernel"),
    (0x00181242, Vr::IS, "Actual Frame Duration"),
    (0x00181243, Vr::IS, "Count Rate"),
    (0x00181250, Vr::SH, "Receive Coil Name"),
    (0x00181251, Vr::SH, "Transmit Coil Name"),
    (0x00181260, Vr::SH, "Plate Type"),
    (0x00181261, Vr::LO, "Phosphor Type"),
    (0x00181300, Vr::IS, "Scan Velocity"),
    (0x00181301, Vr::CS, "Whole Body Technique"),
    (0x00181302, Vr::IS, "Scan Length"),
    (0x00181310, Vr::US, "Acquisition Matrix"),
    (0x00181312, Vr::CS, "In-plane Phase Encoding Direction"),
    (0x00181314, Vr::DS, "Flip Angle"),
    (0x00181315, Vr::CS, "Variable Flip Angle Flag"),
    (0x00181316, Vr::DS, "SAR"),
    (0x00181318, Vr::DS, "d B/dt"),
    (0x00181400, Vr::LO, "Acquisition Device Processing Description"),
    (0x00181401, Vr::LO, "Acquisition Device Processing Code"),
    (0x00181402, Vr::CS, "Cassette Orientation"),
    (0x00181403, Vr::CS, "Cassette Size"),
    (0x00181404, Vr::US, "Exposures on Plate"),
    (0x00181405, Vr::IS, "Relative X-Ray Exposure"),
    (0x00181450, Vr::CS, "Column Angulation"),
    (0x00181500, Vr::CS, "Positioner Motion"),
    (0x00181508, Vr::CS, "Positioner Type"),
    (0x00181510, Vr::DS, "Positioner Primary Angle"),
    (0x00181511, Vr::DS, "Positioner Secondary Angle"),
    (0x00181520, Vr::DS, "Positioner Primary Angle Increment"),
    (0x00181521, Vr::DS, "Positioner Secondary Angle Increment"),
    (0x00181530, Vr::DS, "Detector Primary Angle"),
    (0x00181531, Vr::DS, "Detector Secondary Angle"),
    (0x00181600, Vr::CS, "Shutter Shape"),
    (0x00181602, Vr::IS, "Shutter Left Vertical Edge"),
    (0x00181604, Vr::IS, "Shutter Right Vertical Edge"),
    (0x00181606, Vr::IS, "Shutter Upper Horizontal Edge"),
    (0x00181608, Vr::IS, "Shutter Lower Horizontal Edge"),
    (0x00181610, Vr::IS, "Center of Circular Shutter"),
    (0x00181612, Vr::IS, "Radius of Circular Shutter"),
    (0x00181620, Vr::IS, "Vertices of the Polygonal Shutter"),
    (0x00181628, Vr::FD, "Reference Pixel Physical Value X"),
    (0x00181700, Vr::IS, "Collimator Shape"),
    (0x00181702, Vr::IS, "Collimator Left Vertical Edge"),
    (0x00181704, Vr::IS, "Collimator Right Vertical Edge"),
    (0x00181706, Vr::IS, "Collimator Upper Horizontal Edge"),
    (0x00181708, Vr::IS, "Collimator Lower Horizontal Edge"),
    (0x00181710, Vr::IS, "Center of Circular Collimator"),
    (0x00181712, Vr::IS, "Radius of Circular Collimator"),
    (0x00181720, Vr::IS, "Vertices of the Polygonal Collimator"),
    (0x00185000, Vr::SH, "Output Power"),
    (0x00185010, Vr::LO, "Transducer Data"),
    (0x00185012, Vr::DS, "Focus Depth"),
    (0x00185020, Vr::LO, "Processing Function"),
    (0x00185021, Vr::LO, "Postprocessing Function"),
    (0x00185022, Vr::DS, "Mechanical Index"),
    (0x00185024, Vr::DS, "Bone Thermal Index"),
    (0x00185026, Vr::DS, "Cranial Thermal Index"),
    (0x00185027, Vr::DS, "Soft Tissue Thermal Index"),
    (0x00185028, Vr::DS, "Soft Tissue-focus Thermal Index"),
    (0x00185029, Vr::DS, "Soft Tissue-surface Thermal Index"),
    (0x00185050, Vr::IS, "Depth of Scan Field"),
    (0x00185100, Vr::CS, "Patient Position"),
    (0x00185101, Vr::CS, "View Position"),
    (0x00185104, Vr::SQ, "Projection Eponymous Name Code Sequence"),
    (0x00185210, Vr::DS, "Image Transformation Matrix"),
    (0x00185212, Vr::DS, "Image Translation Vector"),
    (0x00186000, Vr::DS, "Sensitivity"),
    (0x00186011, Vr::SQ, "Sequence of Ultrasound Regions"),
    (0x00186012, Vr::US, "Region Spatial Format"),
    (0x00186014, Vr::US, "Region Data Type"),
    (0x00186016, Vr::UL, "Region Flags"),
    (0x00186018, Vr::UL, "Region Location Min X0"),
    (0x0018601A, Vr::UL, "Region Location Min Y0"),
    (0x0018601C, Vr::UL, "Region Location Max X1"),
    (0x0018601E, Vr::UL, "Region Location Max Y1"),
    (0x00186020, Vr::SL, "Reference Pixel X0"),
    (0x00186022, Vr::SL, "Reference Pixel Y0"),
    (0x00186024, Vr::US, "Physical Units X Direction"),
    (0x00186026, Vr::US, "Physical Units Y Direction"),
    (0x0018602A, Vr::FD, "Reference Pixel Physical Value Y"),
    (0x0018602C, Vr::FD, "Physical Delta X"),
    (0x0018602E, Vr::FD, "Physical Delta Y"),
    (0x00186030, Vr::UL, "Transducer Frequency"),
    (0x00186031, Vr::CS, "Transducer Type"),
    (0x00186032, Vr::UL, "Pulse Repetition Frequency"),
    (0x00186034, Vr::FD, "Doppler Correction Angle"),
    (0x00186036, Vr::FD, "Steering Angle"),
    (0x00186038, Vr::UL, "Doppler Sample Volume X Position (Retired)"),
    (0x00186039, Vr::SL, "Doppler Sample Volume X Position"),
    (0x0018603A, Vr::UL, "Doppler Sample Volume Y Position (Retired)"),
    (0x0018603B, Vr::SL, "Doppler Sample Volume Y Position"),
    (0x0018603C, Vr::UL, "TM-Line Position X0(Retired)"),
    (0x0018603D, Vr::SL, "TM-Line Position X0"),
    (0x0018603E, Vr::UL, "TM-Line Position Y0(Retired)"),
    (0x0018603F, Vr::SL, "TM-Line Position Y0"),
    (0x00186040, Vr::UL, "TM-Line Position X1(Retired)"),
    (0x00186041, Vr::SL, "TM-Line Position X1"),
    (0x00186042, Vr::UL, "TM-Line Position Y1(Retired)"),
    (0x00186043, Vr::SL, "TM-Line Position Y1"),
    (0x00186044, Vr::US, "Pixel Component Organization"),
    (0x00186046, Vr::UL, "Pixel Component Mask"),
    (0x00186048, Vr::UL, "Pixel Component Range Start"),
    (0x0018604A, Vr::UL, "Pixel Component Range Stop"),
    (0x0018604C, Vr::US, "Pixel Component Physical Units"),
    (0x0018604E, Vr::US, "Pixel Component Data Type"),
    (0x00186050, Vr::UL, "Number of Table Break Points"),
    (0x00186052, Vr::UL, "Table of X Break Points"),
    (0x00186054, Vr::FD, "Table of Y Break Points"),
    (0x00186056, Vr::UL, "Number of Table Entries"),
    (0x00186058, Vr::UL, "Table of Pixel Values"),
    (0x0018605A, Vr::UL, "Table of Parameter Values"),
    (0x00187000, Vr::CS, "Detector Conditions Nominal Flag"),
    (0x00187001, Vr::DS, "Detector Temperature"),
    (0x00187004, Vr::CS, "Detector Type"),
    (0x00187005, Vr::CS, "Detector Configuration"),
    (0x00187006, Vr::LT, "Detector Description"),
    (0x00187008, Vr::LT, "Detector Mode"),
    (0x0018700A, Vr::SH, "Detector ID"),
    (0x0018700C, Vr::DA, "Date of Last Detector Calibration"),
    (0x0018700E, Vr::TM, "Time of Last Detector Calibration"),
    (0x00187010, Vr::IS, "Exposures on Detector Since Last Calibration"),
    (0x00187011, Vr::IS, "Exposures on Detector Since Manufactured"),
    (0x00187012, Vr::DS, "Detector Time Since Last Exposure"),
    (0x00187014, Vr::DS, "Detector Active Time"),
    (0x00187016, Vr::DS, "Detector Activation Offset From Exposure"),
    (0x0018701A, Vr::DS, "Detector Binning"),
    (0x00187020, Vr::DS, "Detector Element Physical Size"),
    (0x00187022, Vr::DS, "Detector Element Spacing"),
    (0x00187024, Vr::CS, "Detector Active Shape"),
    (0x00187026, Vr::DS, "Detector Active Dimension(s)"),
    (0x00187028, Vr::DS, "Detector Active Origin"),
    (0x00187030, Vr::DS, "Field of View Origin"),
    (0x00187032, Vr::DS, "Field of View Rotation"),
    (0x00187034, Vr::CS, "Field of View Horizontal Flip"),
    (0x00187040, Vr::LT, "Grid Absorbing Material"),
    (0x00187041, Vr::LT, "Grid Spacing Material"),
    (0x00187042, Vr::DS, "Grid Thickness"),
    (0x00187044, Vr::DS, "Grid Pitch"),
    (0x00187046, Vr::IS, "Grid Aspect Ratio"),
    (0x00187048, Vr::DS, "Grid Period"),
    (0x0018704C, Vr::DS, "Grid Focal Distance"),
    (0x00187050, Vr::LT, "Filter Material"),
    (0x00187052, Vr::DS, "Filter Thickness Minimum"),
    (0x00187054, Vr::DS, "Filter Thickness Maximum"),
    (0x00187060, Vr::CS, "Exposure Control Mode"),
    (0x00187062, Vr::LT, "Exposure Control Mode Description"),
    (0x00187064, Vr::CS, "Exposure Status"),
    (0x00187065, Vr::DS, "Phototimer Setting"),
    (0x0020000D, Vr::UI, "Study Instance UID"),
    (0x0020000E, Vr::UI, "Series Instance UID"),
    (0x00200010, Vr::SH, "Study ID"),
    (0x00200011, Vr::IS, "Series Number"),
    (0x00200012, Vr::IS, "Acquisition Number"),
    (0x00200013, Vr::IS, "Instance Number"),
    (0x00200014, Vr::IS, "Isotope Number"),
    (0x00200015, Vr::IS, "Phase Number"),
    (0x00200016, Vr::IS, "Interval Number"),
    (0x00200017, Vr::IS, "Time Slot Number"),
    (0x00200018, Vr::IS, "Angle Number"),
    (0x00200020, Vr::CS, "Patient Orientation"),
    (0x00200022, Vr::US, "Overlay Number"),
    (0x00200024, Vr::US, "Curve Number"),
    (0x00200030, Vr::DS, "Image Position"),
    (0x00200032, Vr::DS, "Image Position (Patient)"),
    (0x00200037, Vr::DS, "Image Orientation (Patient)"),
    (0x00200050, Vr::DS, "Location"),
    (0x00200052, Vr::UI, "Frame of Reference UID"),
    (0x00200060, Vr::CS, "Laterality"),
    (0x00200070, Vr::LO, "Image Geometry Type"),
    (0x00200080, Vr::UI, "Masking Image"),
    (0x00200100, Vr::IS, "Temporal Position Identifier"),
    (0x00200105, Vr::IS, "Number of Temporal Positions"),
    (0x00200110, Vr::DS, "Temporal Resolution"),
    (0x00201000, Vr::IS, "Series in Study"),
    (0x00201002, Vr::IS, "Images in Acquisition"),
    (0x00201004, Vr::IS, "Acquisitions in Study"),
    (0x00201040, Vr::LO, "Position Reference Indicator"),
    (0x00201041, Vr::DS, "Slice Location"),
    (0x00201070, Vr::IS, "Other Study Numbers"),
    (0x00201200, Vr::IS, "Number of Patient Related Studies"),
    (0x00201202, Vr::IS, "Number of Patient Related Series"),
    (0x00201204, Vr::IS, "Number of Patient Related Instances"),
    (0x00201206, Vr::IS, "Number of Study Related Series"),
    (0x00201208, Vr::IS, "Number of Study Related Instances"),
    (0x00204000, Vr::LT, "Image Comments"),
    (0x00280002, Vr::US, "Samplesper Pixel"),
    (0x00280004, Vr::CS, "Photometric Interpretation"),
    (0x00280006, Vr::US, "Planar Configuration"),
    (0x00280008, Vr::IS, "Number of Frames"),
    (0x00280009, Vr::AT, "Frame Increment Pointer"),
    (0x00280010, Vr::US, "Rows"),
    (0x00280011, Vr::US, "Columns"),
    (0x00280030, Vr::DS, "Pixel Spacing"),
    (0x00280031, Vr::DS, "Zoom Factor"),
    (0x00280032, Vr::DS, "Zoom Center"),
    (0x00280034, Vr::IS, "Pixel Aspect Ratio"),
    (0x00280051, Vr::CS, "Corrected Image"),
    (0x00280100, Vr::US, "Bits Allocated"),
    (0x00280101, Vr::US, "Bits Stored"),
    (0x00280102, Vr::US, "High Bit"),
    (0x00280103, Vr::US, "Pixel Representation"),
    (0x00280106, Vr::US, "Smallest Image Pixel Value"),
    (0x00280107, Vr::US, "Largest Image Pixel Value"),
    (0x00280108, Vr::US, "Smallest Pixel Value in Series"),
    (0x00280109, Vr::US, "Largest Pixel Value in Series"),
    (0x00280120, Vr::US, "Pixel Padding Value"),
    (0x00280300, Vr::CS, "Quality Control Image"),
    (0x00280301, Vr::CS, "Burned In Annotation"),
    (0x00281040, Vr::CS, "Pixel Intensity Relationship"),
    (0x00281041, Vr::SS, "Pixel Intensity Relationship Sign"),
    (0x00281050, Vr::DS, "Window Center"),
    (0x00281051, Vr::DS, "Window Width"),
    (0x00281052, Vr::DS, "Rescale Intercept"),
    (0x00281053, Vr::DS, "Rescale Slope"),
    (0x00281054, Vr::LO, "Rescale Type"),
    (0x00281055, Vr::LO, "Window Center&Width Explanation"),
    (0x00281101, Vr::US, "Red Palette Color Lookup Table Descriptor"),
    (0x00281102, Vr::US, "Green Palette Color Lookup Table Descriptor"),
    (0x00281103, Vr::US, "Blue Palette Color Lookup Table Descriptor"),
    (0x00281104, Vr::US, "Alpha Palette Color Lookup Table Descriptor"),
    (0x00281201, Vr::OW, "Red Palette Color Lookup Table Data"),
    (0x00281202, Vr::OW, "Green Palette Color Lookup Table Data"),
    (0x00281203, Vr::OW, "Blue Palette Color Lookup Table Data"),
    (0x00281204, Vr::OW, "Alpha Palette Color Lookup Table Data"),
    (0x00282110, Vr::CS, "Lossy Image Compression"),
    (0x00283000, Vr::SQ, "Modality LUT Sequence"),
    (0x00283002, Vr::US, "LUT Descriptor"),
    (0x00283003, Vr::LO, "LUT Explanation"),
    (0x00283004, Vr::LO, "Modality LUT Type"),
    (0x00283006, Vr::US, "LUT Data"),
    (0x00283010, Vr::SQ, "VOILUT Sequence"),
    (0x0032000A, Vr::CS, "Study Status ID"),
    (0x0032000C, Vr::CS, "Study Priority ID"),
    (0x00320012, Vr::LO, "Study ID Issuer"),
    (0x00320032, Vr::DA, "Study Verified Date"),
    (0x00320033, Vr::TM, "Study Verified Time"),
    (0x00320034, Vr::DA, "Study Read Date"),
    (0x00320035, Vr::TM, "Study Read Time"),
    (0x00321000, Vr::DA, "Scheduled Study Start Date"),
    (0x00321001, Vr::TM, "Scheduled Study Start Time"),
    (0x00321010, Vr::DA, "Scheduled Study Stop Date"),
    (0x00321011, Vr::TM, "Scheduled Study Stop Time"),
    (0x00321020, Vr::LO, "Scheduled Study Location"),
    (0x00321021, Vr::AE, "Scheduled Study Location AE Title"),
    (0x00321030, Vr::LO, "Reason for Study"),
    (0x00321032, Vr::PN, "Requesting Physician"),
    (0x00321033, Vr::LO, "Requesting Service"),
    (0x00321040, Vr::DA, "Study Arrival Date"),
    (0x00321041, Vr::TM, "Study Arrival Time"),
    (0x00321050, Vr::DA, "Study Completion Date"),
    (0x00321051, Vr::TM, "Study Completion Time"),
    (0x00321055, Vr::CS, "Study Component Status ID"),
    (0x00321060, Vr::LO, "Requested Procedure Description"),
    (0x00321064, Vr::SQ, "Requested Procedure Code Sequence"),
    (0x00321070, Vr::LO, "Requested Contrast Agent"),
    (0x00324000, Vr::LT, "Study Comments"),
    (0x00400001, Vr::AE, "Scheduled Station AE Title"),
    (0x00400002, Vr::DA, "Scheduled Procedure Step Start Date"),
    (0x00400003, Vr::TM, "Scheduled Procedure Step Start Time"),
    (0x00400004, Vr::DA, "Scheduled Procedure Step End Date"),
    (0x00400005, Vr::TM, "Scheduled Procedure Step End Time"),
    (0x00400006, Vr::PN, "Scheduled Performing Physician's Name"),
    (0x00400007, Vr::LO, "Scheduled Procedure Step Description"),
    (0x00400008, Vr::SQ, "Scheduled Protocol Code Sequence"),
    (0x00400009, Vr::SH, "Scheduled Procedure Step ID"),
    (0x00400010, Vr::SH, "Scheduled Station Name"),
    (0x00400011, Vr::SH, "Scheduled Procedure Step Location"),
    (0x00400012, Vr::LO, "Pre-Medication"),
    (0x00400020, Vr::CS, "Scheduled Procedure Step Status"),
    (0x00400100, Vr::SQ, "Scheduled Procedure Step Sequence"),
    (0x00400220, Vr::SQ, "Referenced Non-Image Composite SOP Instance Sequence"),
    (0x00400241, Vr::AE, "Performed Station AE Title"),
    (0x00400242, Vr::SH, "Performed Station Name"),
    (0x00400243, Vr::SH, "Performed Location"),
    (0x00400244, Vr::DA, "Performed Procedure Step Start Date"),
    (0x00400245, Vr::TM, "Performed Procedure Step Start Time"),
    (0x00400250, Vr::DA, "Performed Procedure Step End Date"),
    (0x00400251, Vr::TM, "Performed Procedure Step End Time"),
    (0x00400252, Vr::CS, "Performed Procedure Step Status"),
    (0x00400253, Vr::SH, "Performed Procedure Step ID"),
    (0x00400254, Vr::LO, "Performed Procedure Step Description"),
    (0x00400255, Vr::LO, "Performed Procedure Type Description"),
    (0x00400260, Vr::SQ, "Performed Protocol Code Sequence"),
    (0x00400270, Vr::SQ, "Scheduled Step Attributes Sequence"),
    (0x00400275, Vr::SQ, "Request Attributes Sequence"),
    (0x00400280, Vr::ST, "Comments on the Performed Procedure Step"),
    (0x00400293, Vr::SQ, "Quantity Sequence"),
    (0x00400294, Vr::DS, "Quantity"),
    (0x00400295, Vr::SQ, "Measuring Units Sequence"),
    (0x00400296, Vr::SQ, "Billing Item Sequence"),
    (0x00400300, Vr::US, "Total Time of Fluoroscopy"),
    (0x00400301, Vr::US, "Total Number of Exposures"),
    (0x00400302, Vr::US, "Entrance Dose"),
    (0x00400303, Vr::US, "Exposed Area"),
    (0x00400306, Vr::DS, "Distance Source to Entrance"),
    (0x00400307, Vr::DS, "Distance Source to Support"),
    (0x00400310, Vr::ST, "Commentson Radiation Dose"),
    (0x00400312, Vr::DS, "X-Ray Output"),
    (0x00400314, Vr::DS, "Half Value Layer"),
    (0x00400316, Vr::DS, "Organ Dose"),
    (0x00400318, Vr::CS, "Organ Exposed"),
    (0x00400320, Vr::SQ, "Billing Procedure Step Sequence"),
    (0x00400321, Vr::SQ, "Film Consumption Sequence"),
    (0x00400324, Vr::SQ, "Billing Supplies and Devices Sequence"),
    (0x00400330, Vr::SQ, "Referenced Procedure Step Sequence"),
    (0x00400340, Vr::SQ, "Performed Series Sequence"),
    (0x00400400, Vr::LT, "Comments on the Scheduled Procedure Step"),
    (0x0040050A, Vr::LO, "Specimen Accession Number"),
    (0x00400550, Vr::SQ, "Specimen Sequence"),
    (0x00400551, Vr::LO, "Specimen Identifier"),
    (0x00400555, Vr::SQ, "Acquisition Context Sequence"),
    (0x00400556, Vr::ST, "Acquisition Context Description"),
    (0x0040059A, Vr::SQ, "Specimen Type Code Sequence"),
    (0x004006FA, Vr::LO, "Slide Identifier"),
    (0x0040071A, Vr::SQ, "Image Center Point Coordinates Sequence"),
    (0x0040072A, Vr::DS, "X Offset in Slide Coordinate System"),
    (0x0040073A, Vr::DS, "Y Offset in Slide Coordinate System"),
    (0x0040074A, Vr::DS, "Z Offset in Slide Coordinate System"),
    (0x004008D8, Vr::SQ, "Pixel Spacing Sequence"),
    (0x004008DA, Vr::SQ, "Coordinate System Axis Code Sequence"),
    (0x004008EA, Vr::SQ, "Measurement Units Code Sequence"),
    (0x00401001, Vr::SH, "Requested Procedure ID"),
    (0x00401002, Vr::LO, "Reason for the Requested Procedure"),
    (0x00401003, Vr::SH, "Requested Procedure Priority"),
    (0x00401004, Vr::LO, "Patient Transport Arrangements"),
    (0x00401005, Vr::LO, "Requested Procedure Location"),
    (0x00401006, Vr::SH, "Placer Order Number/Procedure"),
    (0x00401007, Vr::SH, "Filler Order Number/Procedure"),
    (0x00401008, Vr::LO, "Confidentiality Code"),
    (0x00401009, Vr::SH, "Reporting Priority"),
    (0x00401010, Vr::PN, "Names of Intended Recipients of Results"),
    (0x00401400, Vr::LT, "Requested Procedure Comments"),
    (0x00402001, Vr::LO, "Reason for the Imaging Service Request"),
    (0x00402004, Vr::DA, "Issue Date of Imaging Service Request"),
    (0x00402005, Vr::TM, "Issue Time of Imaging Service Request"),
    (0x00402006, Vr::SH, "Placer Order Number/Imaging Service Request (Retired)"),
    (0x00402007, Vr::SH, "Filler Order Number/Imaging Service Request (Retired)"),
    (0x00402008, Vr::PN, "Order Entered By"),
    (0x00402009, Vr::SH, "Order Enterer's Location"),
    (0x00402010, Vr::SH, "Order Callback Phone Number"),
    (0x00402016, Vr::LO, "Placer Order Number/Imaging Service Request"),
    (0x00402017, Vr::LO, "Filler Order Number/Imaging Service Request"),
    (0x00402400, Vr::LT, "Imaging Service Request Comments"),
    (0x00403001, Vr::LO, "Confidentiality Constrainton Patient Data Description"),
    (0x00408302, Vr::DS, "Entrance Doseinm Gy"),
    (0x0040A010, Vr::CS, "Relationship Type"),
    (0x0040A027, Vr::LO, "Verifying Organization"),
    (0x0040A030, Vr::DT, "Verification Date Time"),
    (0x0040A032, Vr::DT, "Observation Date Time"),
    (0x0040A040, Vr::CS, "Value Type"),
    (0x0040A043, Vr::SQ, "Concept Name Code Sequence"),
    (0x0040A050, Vr::CS, "Continuity Of Content"),
    (0x0040A073, Vr::SQ, "Verifying Observer Sequence"),
    (0x0040A075, Vr::PN, "Verifying Observer Name"),
    (0x0040A088, Vr::SQ, "Verifying Observer Identification Code Sequence"),
    (0x0040A0B0, Vr::US, "Referenced Waveform Channels"),
    (0x0040A120, Vr::DT, "Date Time"),
    (0x0040A121, Vr::DA, "Date"),
    (0x0040A122, Vr::TM, "Time"),
    (0x0040A123, Vr::PN, "Person Name"),
    (0x0040A124, Vr::UI, "UID"),
    (0x0040A130, Vr::CS, "Temporal Range Type"),
    (0x0040A132, Vr::UL, "Referenced Sample Positions"),
    (0x0040A136, Vr::US, "Referenced Frame Numbers"),
    (0x0040A138, Vr::DS, "Referenced Time Offsets"),
    (0x0040A13A, Vr::DT, "Referenced Date Time"),
    (0x0040A160, Vr::UT, "Text Value"),
    (0x0040A168, Vr::SQ, "Concept Code Sequence"),
    (0x0040A180, Vr::US, "Annotation Group Number"),
    (0x0040A195, Vr::SQ, "Modifier Code Sequence"),
    (0x0040A300, Vr::SQ, "Measured Value Sequence"),
    (0x0040A30A, Vr::DS, "Numeric Value"),
    (0x0040A360, Vr::SQ, "Predecessor Documents Sequence"),
    (0x0040A370, Vr::SQ, "Referenced Request Sequence"),
    (0x0040A372, Vr::SQ, "Performed Procedure Code Sequence"),
    (0x0040A375, Vr::SQ, "Current Requested Procedure Evidence Sequence"),
    (0x0040A385, Vr::SQ, "Pertinent Other Evidence Sequence"),
    (0x0040A491, Vr::CS, "Completion Flag"),
    (0x0040A492, Vr::LO, "Completion Flag Description"),
    (0x0040A493, Vr::CS, "Verification Flag"),
    (0x0040A504, Vr::SQ, "Content Template Sequence"),
    (0x0040A525, Vr::SQ, "Identical Documents Sequence"),
    (0x0040A730, Vr::SQ, "Content Sequence"),
    (0x0040B020, Vr::SQ, "Waveform Annotation Sequence"),
    (0x0040DB00, Vr::CS, "Template Identifier"),
    (0x0040DB06, Vr::DT, "Template Version"),
    (0x0040DB07, Vr::DT, "Template Local Version"),
    (0x0040DB0B, Vr::CS, "Template Extension Flag"),
    (0x0040DB0C, Vr::UI, "Template Extension Organization UID"),
    (0x0040DB0D, Vr::UI, "Template Extension Creator UID"),
    (0x0040DB73, Vr::UL, "Referenced Content Item Identifier"),
    (0x00540011, Vr::US, "Number of Energy Windows"),
    (0x00540012, Vr::SQ, "Energy Window Information Sequence"),
    (0x00540013, Vr::SQ, "Energy Window Range Sequence"),
    (0x00540014, Vr::DS, "Energy Window Lower Limit"),
    (0x00540015, Vr::DS, "Energy Window Upper Limit"),
    (0x00540016, Vr::SQ, "Radiopharmaceutical Information Sequence"),
    (0x00540017, Vr::IS, "Residual Syringe Counts"),
    (0x00540018, Vr::SH, "Energy Window Name"),
    (0x00540020, Vr::US, "Detector Vector"),
    (0x00540021, Vr::US, "Number of Detectors"),
    (0x00540022, Vr::SQ, "Detector Information Sequence"),
    (0x00540030, Vr::US, "Phase Vector"),
    (0x00540031, Vr::US, "Number of Phases"),
    (0x00540032, Vr::SQ, "Phase Information Sequence"),
    (0x00540033, Vr::US, "Number of Frames in Phase"),
    (0x00540036, Vr::IS, "Phase Delay"),
    (0x00540038, Vr::IS, "Pause Between Frames"),
    (0x00540039, Vr::CS, "Phase Description"),
    (0x00540050, Vr::US, "Rotation Vector"),
    (0x00540051, Vr::US, "Number of Rotations"),
    (0x00540052, Vr::SQ, "Rotation Information Sequence"),
    (0x00540053, Vr::US, "Number of Frames in Rotation"),
    (0x00540060, Vr::US, "R-R Interval Vector"),
    (0x00540061, Vr::US, "Number of R-R Intervals"),
    (0x00540062, Vr::SQ, "Gated Information Sequence"),
    (0x00540063, Vr::SQ, "Data Information Sequence"),
    (0x00540070, Vr::US, "Time Slot Vector"),
    (0x00540071, Vr::US, "Number of Time Slots"),
    (0x00540072, Vr::SQ, "Time Slot Information Sequence"),
    (0x00540073, Vr::DS, "Time Slot Time"),
    (0x00540080, Vr::US, "Slice Vector"),
    (0x00540081, Vr::US, "Number of Slices"),
    (0x00540090, Vr::US, "Angular View Vector"),
    (0x00540100, Vr::US, "Time Slice Vector"),
    (0x00540101, Vr::US, "Number of Time Slices"),
    (0x00540200, Vr::DS, "Start Angle"),
    (0x00540202, Vr::CS, "Type of Detector Motion"),
    (0x00540210, Vr::IS, "Trigger Vector"),
    (0x00540211, Vr::US, "Number of Triggers in Phase"),
    (0x00540220, Vr::SQ, "View Code Sequence"),
    (0x00540222, Vr::SQ, "View Modifier Code Sequence"),
    (0x00540300, Vr::SQ, "Radionuclide Code Sequence"),
    (0x00540302, Vr::SQ, "Administration Route Code Sequence"),
    (0x00540304, Vr::SQ, "Radiopharmaceutical Code Sequence"),
    (0x00540306, Vr::SQ, "Calibration Data Sequence"),
    (0x00540308, Vr::US, "Energy Window Number"),
    (0x00540400, Vr::SH, "Image ID"),
    (0x00540410, Vr::SQ, "Patient Orientation Code Sequence"),
    (0x00540412, Vr::SQ, "Patient Orientation Modifier Code Sequence"),
    (0x00540414, Vr::SQ, "Patient Gantry Relationship Code Sequence"),
    (0x00540500, Vr::CS, "Slice Progression Direction"),
    (0x00541000, Vr::CS, "Series Type"),
    (0x00541001, Vr::CS, "Units"),
    (0x00541002, Vr::CS, "Counts Source"),
    (0x00541004, Vr::CS, "Reprojection Method"),
    (0x00541100, Vr::CS, "Randoms Correction Method"),
    (0x00541101, Vr::LO, "Attenuation Correction Method"),
    (0x00541102, Vr::CS, "Decay Correction"),
    (0x00541103, Vr::LO, "Reconstruction Method"),
    (0x00541104, Vr::LO, "Detector Lines of Response Used"),
    (0x00541105, Vr::LO, "Scatter Correction Method"),
    (0x00541200, Vr::DS, "Axial Acceptance"),
    (0x00541201, Vr::IS, "Axial Mash"),
    (0x00541202, Vr::IS, "Transverse Mash"),
    (0x00541203, Vr::DS, "Detector Element Size"),
    (0x00541210, Vr::DS, "Coincidence Window Width"),
    (0x00541220, Vr::CS, "Secondary Counts Type"),
    (0x00541300, Vr::DS, "Frame Reference Time"),
    (0x00541310, Vr::IS, "Primary (Prompts) Counts Accumulated"),
    (0x00541311, Vr::IS, "Secondary Counts Accumulated"),
    (0x00541320, Vr::DS, "Slice Sensitivity Factor"),
    (0x00541321, Vr::DS, "Decay Factor"),
    (0x00541322, Vr::DS, "Dose Calibration Factor"),
    (0x00541323, Vr::DS, "Scatter Fraction Factor"),
    (0x00541324, Vr::DS, "Dead Time Factor"),
    (0x00541330, Vr::US, "Image Index"),
    (0x00541400, Vr::CS, "Counts Included"),
    (0x00541401, Vr::CS, "Dead Time Correction Flag"),
    (0x00880200, Vr::SQ, "Icon Image Sequence"),
    (0x20300010, Vr::US, "Annotation Position"),
    (0x20300020, Vr::LO, "Text String"),
    (0x20500010, Vr::SQ, "Presentation LUT Sequence"),
    (0x20500020, Vr::CS, "Presentation LUT Shape"),
    (0x20500500, Vr::SQ, "Referenced Presentation LUT Sequence"),
    (0x30020002, Vr::SH, "RT Image Label"),
    (0x30020003, Vr::LO, "RT Image Name"),
    (0x30020004, Vr::ST, "RT Image Description"),
    (0x3002000A, Vr::CS, "Reported Values Origin"),
    (0x3002000C, Vr::CS, "RT Image Plane"),
    (0x3002000D, Vr::DS, "X-Ray Image Receptor Translation"),
    (0x3002000E, Vr::DS, "X-Ray Image Receptor Angle"),
    (0x30020010, Vr::DS, "RT Image Orientation"),
    (0x30020011, Vr::DS, "Image Plane Pixel Spacing"),
    (0x30020012, Vr::DS, "RT Image Position"),
    (0x30020020, Vr::SH, "Radiation Machine Name"),
    (0x30020022, Vr::DS, "Radiation Machine SAD"),
    (0x30020024, Vr::DS, "Radiation Machine SSD"),
    (0x30020026, Vr::DS, "RT Image SID"),
    (0x30020028, Vr::DS, "Source to Reference Object Distance"),
    (0x30020029, Vr::IS, "Fraction Number"),
    (0x30020030, Vr::SQ, "Exposure Sequence"),
    (0x30020032, Vr::DS, "Meterset Exposure"),
    (0x30020034, Vr::DS, "Diaphragm Position"),
    (0x30020040, Vr::SQ, "Fluence Map Sequence"),
    (0x30020041, Vr::CS, "Fluence Data Source"),
    (0x30020042, Vr::DS, "Fluence Data Scale"),
    (0x30040001, Vr::CS, "DVH Type"),
    (0x30040002, Vr::CS, "Dose Units"),
    (0x30040004, Vr::CS, "Dose Type"),
    (0x30040006, Vr::LO, "Dose Comment"),
    (0x30040008, Vr::DS, "Normalization Point"),
    (0x3004000A, Vr::CS, "Dose Summation Type"),
    (0x3004000C, Vr::DS, "Grid Frame Offset Vector"),
    (0x3004000E, Vr::DS, "Dose Grid Scaling"),
    (0x30040010, Vr::SQ, "RT Dose ROI Sequence"),
    (0x30040012, Vr::DS, "Dose Value"),
    (0x30040014, Vr::CS, "Tissue Heterogeneity Correction"),
    (0x30040040, Vr::DS, "DVH Normalization Point"),
    (0x30040042, Vr::DS, "DVH Normalization Dose Value"),
    (0x30040050, Vr::SQ, "DVH Sequence"),
    (0x30040052, Vr::DS, "DVH Dose Scaling"),
    (0x30040054, Vr::CS, "DVH Volume Units"),
    (0x30040056, Vr::IS, "DVH Number of Bins"),
    (0x30040058, Vr::DS, "DVH Data"),
    (0x30040060, Vr::SQ, "DVH Referenced ROI Sequence"),
    (0x30040062, Vr::CS, "DVHROI Contribution Type"),
    (0x30040070, Vr::DS, "DVH Minimum Dose"),
    (0x30040072, Vr::DS, "DVH Maximum Dose"),
    (0x30040074, Vr::DS, "DVH Mean Dose"),
    (0x300A00B3, Vr::CS, "Primary Dosimeter Unit"),
    (0x300A00F0, Vr::IS, "Number of Blocks"),
    (0x300A011E, Vr::DS, "Gantry Angle"),
    (0x300A0120, Vr::DS, "Beam Limiting Device Angle"),
    (0x300A0122, Vr::DS, "Patient Support Angle"),
    (0x300A0128, Vr::DS, "Table Top Vertical Position"),
    (0x300A0129, Vr::DS, "Table Top Longitudinal Position"),
    (0x300A012A, Vr::DS, "Table Top Lateral Position"),
    (0x300C0006, Vr::IS, "Referenced Beam Number"),
    (0x300C0008, Vr::DS, "Start Cumulative Meterset Weight"),
    (0x300C0022, Vr::IS, "Referenced Fraction Group Number"),
    (0x7FE00010, Vr::OW, "Pixel Data"),
];
